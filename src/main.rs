use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use space_odyssey::engine::{Output, OutputBlock};
use space_odyssey::world::World;
use space_odyssey::{GameState, builtin_world, load_world_from_file};

#[derive(Parser)]
#[command(
    name = "space-odyssey",
    about = "Space Odyssey: collect every item, then face the Captain",
    version
)]
struct Cli {
    /// World file to play (default: the built-in Space Odyssey map)
    world: Option<PathBuf>,

    /// Load and validate the world, print a summary, and exit
    #[arg(long)]
    check: bool,

    /// Input that ends the session immediately
    #[arg(long, default_value = "exit")]
    exit_word: String,
}

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_status = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
            }
            OutputBlock::Status(s) => {
                if !started_status {
                    println!(); // status block stands apart from turn messages
                    started_status = true;
                }
                println!("{}", s);
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!();
                    }
                    started_events = true;
                }
                println!("{}", ev);
            }
        }
        printed_anything = true;
    }
}

fn load(cli: &Cli) -> World {
    let result = match &cli.world {
        Some(path) => load_world_from_file(path),
        None => builtin_world(),
    };

    match result {
        Ok(world) => world,
        Err(e) => {
            error!("world load failed: {e}");
            eprintln!("Failed to load world: {e}");
            process::exit(1);
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let world = load(&cli);

    if cli.check {
        println!(
            "{}: {} rooms, {} items",
            world.name,
            world.rooms.len(),
            world.total_items()
        );
        return Ok(());
    }

    info!("starting '{}' in '{}'", world.name, world.start_room);
    let mut game = GameState::new(world);
    flush_output(game.intro());

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        flush_output(game.status());
        if game.outcome().is_some() {
            break;
        }

        print!("\nEnter your moves or {} to exit the game: ", cli.exit_word);
        io::stdout().flush()?;

        let mut buf = Vec::new();
        let bytes_read = lines.read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            println!("\nGoodbye.");
            break;
        }

        // Undecodable bytes become U+FFFD so the engine answers them like any
        // other unknown command.
        let input = String::from_utf8_lossy(&buf);

        // Only the line terminator goes; case and inner whitespace are significant.
        let input = input
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(input.as_ref());

        if input == cli.exit_word {
            println!("Goodbye.");
            break;
        }

        let (out, _) = game.step(input);
        flush_output(out);
    }

    Ok(())
}
