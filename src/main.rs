use dotenv::dotenv;
use pokedex_details::logger::init_logger;
use pokedex_details::requester::PokeApiClient;
use pokedex_details::{fetch_details, Config, DetailsScreen, Renderer, Result, Tab};
use std::env;
use tokio::runtime::Runtime;

// dex <name-or-id> [info|stats|moves]
fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;
    init_logger(config.log_dir.as_deref())?;

    let mut args = env::args().skip(1);
    let identifier = args.next();
    let tab = match args.next() {
        Some(t) => t.parse::<Tab>()?,
        None => Tab::default(),
    };

    let api = PokeApiClient::new(config.api_endpoint.as_str(), config.timeout())?;
    let renderer = Renderer::from_config(&config).for_terminal(atty::is(atty::Stream::Stdout));

    Runtime::new()?.block_on(async move {
        let mut screen = DetailsScreen::new();
        screen.select_tab(tab);

        if let Some(ticket) = screen.navigate(identifier.as_deref()) {
            eprint!("{}", renderer.render(screen.state()));
            let id = screen.state().identifier.clone().unwrap_or_default();
            let outcome = fetch_details(&api, &id).await;
            screen.complete(ticket, outcome);
        } else {
            log::warn!("No pokemon given, nothing to show");
        }

        print!("{}", renderer.render(screen.state()));
    });

    Ok(())
}
