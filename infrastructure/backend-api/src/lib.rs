pub mod client;
pub mod cooking;
pub mod food;
pub mod nutrition;
pub mod shopping;
mod wire;

pub use client::BackendClient;
pub use cooking::CookingGatewayHttp;
pub use food::FoodGatewayHttp;
pub use nutrition::NutritionGatewayHttp;
pub use shopping::ShoppingGatewayHttp;
