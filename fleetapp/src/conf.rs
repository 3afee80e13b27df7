use clap::Parser;

#[derive(Clone, Debug, Parser)]
pub struct Cli {
    #[clap(long, value_name = "FLEETAC_DB_URL", env = "FLEETAC_DB_URL")]
    pub fleetac_db_url: String,
    #[clap(long, value_name = "FLEETAPP_LISTEN", env = "FLEETAPP_LISTEN", default_value = "127.0.0.1:8000")]
    pub listen: String,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
