// Sitemap generation: static and dynamic URL entries, assembly, XML output

pub mod assemble;
pub mod pages;
pub mod urls;
pub mod xml;

pub use assemble::{RenderOptions, assemble, build_document, render_sitemap};
pub use pages::static_pages;
pub use urls::{build_dynamic, build_static};
pub use xml::to_xml;
