use clap::Parser;

use rshape::cli::Cli;
use rshape::oop::{Circle, Shape, Square};
use rshape::report::{comparison_line, THRESHOLD};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Square::new(5.0)),
        Box::new(Circle::new(2.0)),
    ];

    for shape in &shapes {
        log::info!("comparing {} against {}", shape, THRESHOLD);
        println!("{}", comparison_line(&**shape, THRESHOLD, cli.dispatch)?);
    }

    Ok(())
}
