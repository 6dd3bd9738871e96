use hashrouter::{cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init_logging()?;
    cli::run_cli()
}
