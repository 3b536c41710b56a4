use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecad-api")]
#[command(about = "Web API for ECA&D station temperature readings")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        default_value = "data",
        help = "Directory holding stations.txt and per-station readings files"
    )]
    pub data_dir: PathBuf,

    #[arg(long, default_value = "127.0.0.1", help = "Address to bind")]
    pub host: IpAddr,

    #[arg(short, long, default_value = "5000", help = "Port to listen on")]
    pub port: u16,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
