pub mod items;

pub async fn health() -> &'static str {
    "Stockery API is running!"
}
