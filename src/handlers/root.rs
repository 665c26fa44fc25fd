/// Plain-text greeting at the service root, doubling as a liveness probe
pub async fn welcome() -> &'static str {
    "Welcome to the BobaShop API!"
}
