use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crawler_control::cli::{Cli, Cmd, parse_value};
use crawler_control::connection::open_connection;
use crawler_control::{CrawlerController, Outcome, teleop};

fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(Some(Outcome::Rejected(rejection))) => {
            eprintln!("Command rejected: {}", rejection);
            std::process::exit(2);
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Crawler error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<Option<Outcome>, Box<dyn std::error::Error + Send + Sync>> {
    let config = cli.link.resolve()?;
    let mut controller = CrawlerController::new(open_connection(&config));

    if let Cmd::List = cli.cmd {
        for command in controller.commands().iter() {
            println!(
                "{:>3}  {:<24} value {}",
                command.id(),
                command.name(),
                if command.value_required() { "required" } else { "optional" }
            );
        }
        return Ok(None);
    }

    info!("Using {:?} transport", config.transport);
    controller.connect_to_crawler()?;

    let outcome = match cli.cmd {
        Cmd::Drive { speed } => controller.drive(speed)?,
        Cmd::Forward { speed } => controller.drive_forward(speed)?,
        Cmd::Backward { speed } => controller.drive_backward(speed)?,
        Cmd::Steer { steering } => controller.steer(steering)?,
        Cmd::Speak { text } => controller.speak(Some(text.as_str()))?,
        Cmd::Enable => controller.enable_motor_control()?,
        Cmd::Disable => controller.disable_motor_control()?,
        Cmd::Raw { name, value } => {
            controller.send_named(&name, value.as_deref().map(parse_value))?
        }
        Cmd::Teleop => {
            teleop::run(&mut controller)?;
            return Ok(None);
        }
        Cmd::List => return Ok(None),
    };

    Ok(Some(outcome))
}
