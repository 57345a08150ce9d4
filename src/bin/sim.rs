use broadside::{init_logging, AiPlayer, GameConfig, Match, PlayerId, Seat, Strategy};
use clap::{Parser, ValueEnum};
use rand::{rngs::SmallRng, SeedableRng};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Random,
    Hunt,
    Spacing,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => Strategy::Random,
            StrategyArg::Hunt => Strategy::HuntAndTarget,
            StrategyArg::Spacing => Strategy::Spacing,
        }
    }
}

/// Play one automated game and print a JSON summary.
#[derive(Parser)]
struct Args {
    seed1: u64,
    seed2: u64,
    #[arg(long, value_enum, default_value_t = StrategyArg::Spacing)]
    first: StrategyArg,
    #[arg(long, value_enum, default_value_t = StrategyArg::Hunt)]
    second: StrategyArg,
    #[arg(long, default_value_t = broadside::DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = broadside::DEFAULT_HEIGHT)]
    height: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = GameConfig {
        width: args.width,
        height: args.height,
        ..GameConfig::default()
    };

    let first: Strategy = args.first.into();
    let second: Strategy = args.second.into();
    let mut seats = [
        Seat::new(
            Box::new(AiPlayer::new("player1", first)),
            SmallRng::seed_from_u64(args.seed1),
        ),
        Seat::new(
            Box::new(AiPlayer::new("player2", second)),
            SmallRng::seed_from_u64(args.seed2),
        ),
    ];

    let g1 = seats[0].prepare_grid(&config)?;
    let g2 = seats[1].prepare_grid(&config)?;
    let mut game = Match::new(g1, g2, PlayerId::First)?;
    let summary = game.play_out(&mut seats, config.max_rejected_shots)?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
