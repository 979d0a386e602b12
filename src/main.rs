use sitecheck::cli::Cli;
use sitecheck::config::Config;
use sitecheck::core::probe::session::SessionCallbacks;
use sitecheck::core::probe::types::Status;
use sitecheck::core::{Prober, StatusRenderer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        let path = match &cli.config_path {
            Some(path) => Config::init_at(path)?,
            None => Config::init()?,
        };
        println!("Config written to {}", path.display());
        return Ok(());
    }

    let mut config = Config::load_from(cli.config_path.as_deref())?;
    cli.apply_to(&mut config);

    if cli.print {
        config.print()?;
        return Ok(());
    }

    if cli.check {
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    let target = config.to_target();
    let json = cli.json;
    let renderer = StatusRenderer::new();

    let mut callbacks = SessionCallbacks::new().on_status_changed(move |display| {
        if json {
            println!("{}", renderer.render_json(display));
        } else {
            println!("{}", renderer.render(display));
        }
    });
    for action in config.connect_actions() {
        callbacks = callbacks.on_became_online(action.into_callback());
    }
    for action in config.disconnect_actions() {
        callbacks = callbacks.on_became_offline(action.into_callback());
    }

    let mut prober = Prober::new(target, callbacks)?;

    if cli.once {
        prober.run_once().await;
        let code = match prober.status() {
            Status::Online => 0,
            Status::Offline | Status::Checking => 1,
            Status::Error => 2,
        };
        prober.stop();
        std::process::exit(code);
    }

    prober.start();
    tokio::signal::ctrl_c().await?;
    prober.stop();

    Ok(())
}
