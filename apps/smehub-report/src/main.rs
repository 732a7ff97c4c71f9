use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = smehub_report::Args::parse();
	smehub_report::run(args).await
}
