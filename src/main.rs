#[tokio::main]
async fn main() -> std::io::Result<()> {
    aim_engine::run_with_config().await
}
