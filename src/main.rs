#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, print_player_view, AiPlayer, CliPlayer, FleetSpec, GameConfig, Match, Player,
    PlayerId, Seat, Strategy, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Random,
    Hunt,
    Spacing,
}

#[cfg(feature = "std")]
impl PlayerType {
    fn build(self, name: String) -> Box<dyn Player> {
        match self {
            PlayerType::Human => Box::new(CliPlayer::stdio(name)),
            PlayerType::Random => Box::new(AiPlayer::new(name, Strategy::Random)),
            PlayerType::Hunt => Box::new(AiPlayer::new(name, Strategy::HuntAndTarget)),
            PlayerType::Spacing => Box::new(AiPlayer::new(name, Strategy::Spacing)),
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game on the local machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: usize,
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,
        #[arg(long, default_value = "2:1,3:2,4:1,5:1", help = "Fleet as <length>:<count>,...")]
        fleet: FleetSpec,
        #[arg(long, help = "Allow vessels to touch each other")]
        no_spacing: bool,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        first: PlayerType,
        #[arg(long, value_enum, default_value_t = PlayerType::Spacing)]
        second: PlayerType,
        #[arg(long, default_value = "Player 1")]
        first_name: String,
        #[arg(long, default_value = "Player 2")]
        second_name: String,
        #[arg(long, help = "Let the second player shoot first")]
        second_starts: bool,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s.wrapping_add(offset))
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local {
            seed,
            width,
            height,
            fleet,
            no_spacing,
            first,
            second,
            first_name,
            second_name,
            second_starts,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = GameConfig {
                width,
                height,
                fleet,
                enforce_spacing: !no_spacing,
                ..GameConfig::default()
            };
            let humans = [first, second]
                .iter()
                .filter(|p| matches!(p, PlayerType::Human))
                .count();
            if humans > 1 {
                // Each human seat holds the stdin lock for the whole game.
                anyhow::bail!("at most one human player is supported");
            }
            let watching = humans == 0;

            let mut seats = [
                Seat::new(first.build(first_name), seeded_rng(seed, 0)),
                Seat::new(second.build(second_name), seeded_rng(seed, 1)),
            ];
            let grid1 = seats[0].prepare_grid(&config)?;
            let grid2 = seats[1].prepare_grid(&config)?;

            let starting = if second_starts {
                PlayerId::Second
            } else {
                PlayerId::First
            };
            let mut game = Match::new(grid1, grid2, starting)?;

            while !game.state().is_over() {
                let report = game.tick(&mut seats, config.max_rejected_shots)?;
                if watching {
                    let name = seats[report.shooter.index()].player.name();
                    match report.destroyed {
                        Some(length) => println!(
                            "{} fires at {:?}: {:?}, vessel of length {} destroyed",
                            name, report.coord, report.outcome, length
                        ),
                        None => {
                            println!("{} fires at {:?}: {:?}", name, report.coord, report.outcome)
                        }
                    }
                }
            }

            println!("\n═══════════════════════ GAME OVER ═══════════════════════\n");
            for id in [PlayerId::First, PlayerId::Second] {
                println!("── {} ──", seats[id.index()].player.name());
                print_player_view(game.grid(id), &game.view_for(id));
                println!();
            }
            if let Some(winner) = game.winner() {
                println!(
                    "🎉 {} wins after {} shots!",
                    seats[winner.index()].player.name(),
                    game.shots(winner)
                );
            }
        }
    }
    Ok(())
}
