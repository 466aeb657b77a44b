// Slug sources backing the sitemap (GraphQL endpoint)

pub mod graphql;

pub use graphql::GraphqlClient;
