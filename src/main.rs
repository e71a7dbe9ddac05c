use std::path::Path;
use std::process;

use connect_four_engine::bench::{AgentFactory, BenchmarkRunner};
use connect_four_engine::config::AppConfig;
use connect_four_engine::engine::{Agent, BaselineAgent, SearchEngine};
use connect_four_engine::ui::{display, GameSession, SessionEnd};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(Path::new("config.toml"))?;

    loop {
        display::print_welcome()?;
        let choice = display::read_menu_choice()?;

        match choice.as_str() {
            "q" => {
                display::clear_screen()?;
                break;
            }
            "1" => {
                if GameSession::vs_human().run()? == SessionEnd::Quit {
                    continue;
                }
            }
            "2" => {
                if GameSession::vs_computer().run()? == SessionEnd::Quit {
                    continue;
                }
            }
            "3" => {
                run_benchmark(&config)?;
            }
            _ => continue,
        }

        if display::read_play_again()? != "y" {
            display::clear_screen()?;
            break;
        }
    }

    Ok(())
}

fn run_benchmark(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let baseline_depth = config.engine.baseline_depth;
    let make_engine: AgentFactory = &|player| Box::new(SearchEngine::new(player)) as Box<dyn Agent>;
    let make_baseline: AgentFactory =
        &move |player| Box::new(BaselineAgent::with_depth(player, baseline_depth)) as Box<dyn Agent>;

    println!(
        "\nRunning {} games against the depth-{} baseline...\n",
        config.benchmark.num_games, baseline_depth
    );
    let runner = BenchmarkRunner::new(config.benchmark.clone());
    let results = runner.run(make_engine, make_baseline)?;

    println!("\n{}", results.report());
    let (games_path, moves_path) = results.save(&config.benchmark.output_dir)?;
    println!("\nSaved {} and {}", games_path.display(), moves_path.display());
    Ok(())
}
