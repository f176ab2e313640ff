use flipchip_othello::test_utils::play_self;
use flipchip_othello::Outcome;
use indicatif::{ProgressBar, ProgressStyle};

const GAMES: u64 = 200;

#[test]
fn seeded_self_play() {
    let progress = ProgressBar::new(GAMES).with_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut decided = 0;
    for seed in progress.wrap_iter(0..GAMES) {
        let record = play_self(seed);
        assert!(record.moves <= 60, "seed {}: {:?}", seed, record);
        if let Outcome::Winner(_) = record.summary.outcome {
            decided += 1;
        }
    }
    progress.finish();

    assert!(decided > 0);
}
