use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = qprof_api::Args::parse();
	qprof_api::run(args).await
}
