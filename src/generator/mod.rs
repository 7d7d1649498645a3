pub mod links;

pub use links::proxy_to_link;
