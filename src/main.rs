use crypto_trade::run;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(_) => {
            tracing::info!("Server stopped");
        }
        Err(err) => {
            tracing::error!(error = %err, "server failed");
            std::process::exit(1);
        }
    }
}
