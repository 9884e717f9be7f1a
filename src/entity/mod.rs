pub mod games;

pub use games::Entity as Games;
