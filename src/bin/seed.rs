//! Problem seeder
//!
//! Inserts the demo problem set with sample and generated hidden test
//! cases. Safe to run repeatedly: problems already present (by title) are
//! skipped.

use codearena::{config::Config, db, db::repositories::ProblemRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct SeedCase {
    input: String,
    output: String,
    is_sample: bool,
}

struct SeedProblem {
    title: &'static str,
    description: &'static str,
    constraints: &'static str,
    difficulty: &'static str,
    cases: Vec<SeedCase>,
}

fn sample(input: &str, output: &str) -> SeedCase {
    SeedCase {
        input: input.to_string(),
        output: output.to_string(),
        is_sample: true,
    }
}

fn hidden(input: String, output: String) -> SeedCase {
    SeedCase {
        input,
        output,
        is_sample: false,
    }
}

fn sum_of_two_numbers() -> SeedProblem {
    let mut cases = vec![sample("1 2", "3"), sample("10 20", "30")];
    for i in 1..=20i64 {
        let a = i * 3 + 1;
        let b = i * 7 + 2;
        cases.push(hidden(format!("{a} {b}"), format!("{}", a + b)));
    }

    SeedProblem {
        title: "Sum of 2 numbers",
        description: "Read two integers a and b from a single line and print their sum.",
        constraints: "-10^9 <= a, b <= 10^9",
        difficulty: "easy",
        cases,
    }
}

fn reverse_a_string() -> SeedProblem {
    let words = [
        "hello", "arena", "compiler", "submission", "leaderboard", "verdict", "pipeline",
        "postgres", "token", "sandbox",
    ];

    let mut cases = vec![sample("hello", "olleh"), sample("abc", "cba")];
    for word in words {
        let reversed: String = word.chars().rev().collect();
        cases.push(hidden(word.to_string(), reversed));
    }

    SeedProblem {
        title: "Reverse a String",
        description: "Read a single word and print it reversed.",
        constraints: "1 <= length <= 100, lowercase letters only",
        difficulty: "easy",
        cases,
    }
}

fn cherry_bomb() -> SeedProblem {
    let mut cases = vec![
        sample("3\n1 2 3\n5 4 3", "YES"),
        sample("2\n1 2\n2 2", "NO"),
    ];

    // Complementary arrays on odd rounds, a perturbed last element on even.
    for i in 1..=15i64 {
        let n = 2 + (i % 5) as usize;
        let a: Vec<i64> = (0..n as i64).map(|j| (i * (j + 1)) % 10).collect();
        let x = a[0] + 7;
        let mut b: Vec<i64> = a.iter().map(|v| x - v).collect();
        let answer = if i % 2 == 1 {
            "YES"
        } else {
            b[n - 1] += 1;
            "NO"
        };

        let join = |v: &[i64]| {
            v.iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        cases.push(hidden(
            format!("{n}\n{}\n{}", join(&a), join(&b)),
            answer.to_string(),
        ));
    }

    SeedProblem {
        title: "Cherry Bomb",
        description: "Given two arrays a and b of length n, print YES if a[i] + b[i] is the \
                      same for every i, otherwise print NO.",
        constraints: "2 <= n <= 100, 0 <= a[i], b[i] <= 10^9",
        difficulty: "medium",
        cases,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    for spec in [sum_of_two_numbers(), reverse_a_string(), cherry_bomb()] {
        if ProblemRepository::find_by_title(&pool, spec.title)
            .await?
            .is_some()
        {
            tracing::info!(title = spec.title, "Problem already seeded, skipping");
            continue;
        }

        let problem = ProblemRepository::create(
            &pool,
            spec.title,
            spec.description,
            spec.constraints,
            spec.difficulty,
        )
        .await?;

        for (position, case) in spec.cases.iter().enumerate() {
            ProblemRepository::create_test_case(
                &pool,
                &problem.id,
                &case.input,
                &case.output,
                case.is_sample,
                position as i32,
            )
            .await?;
        }

        tracing::info!(
            title = spec.title,
            cases = spec.cases.len(),
            "Seeded problem"
        );
    }

    Ok(())
}
