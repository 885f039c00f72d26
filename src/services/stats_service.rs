//! Statistics and leaderboard service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{BASE_RATING, RATING_PER_SOLVE},
    db::repositories::{ProblemRepository, SubmissionRepository},
    error::AppResult,
    handlers::leaderboard::LeaderboardEntry,
    handlers::users::response::UserStatsResponse,
};

/// Maps a solved count to a rating
///
/// The formula is deliberately simple; anything smarter (decay, opponent
/// strength) slots in behind this trait without touching queries or
/// handlers.
pub trait ScoringStrategy: Send + Sync {
    fn rating(&self, solved: i64) -> i64;
}

/// Default linear rating: base + step per distinct solved problem
#[derive(Debug, Clone)]
pub struct LinearScoring {
    pub base: i64,
    pub per_solve: i64,
}

impl Default for LinearScoring {
    fn default() -> Self {
        Self {
            base: BASE_RATING,
            per_solve: RATING_PER_SOLVE,
        }
    }
}

impl ScoringStrategy for LinearScoring {
    fn rating(&self, solved: i64) -> i64 {
        self.base + self.per_solve * solved
    }
}

/// One user's aggregate before ranking
#[derive(Debug, sqlx::FromRow)]
struct LeaderboardRow {
    full_name: String,
    email: String,
    solved: i64,
}

/// Statistics service for business logic
pub struct StatsService;

impl StatsService {
    /// Full computed ranking across all users
    pub async fn leaderboard(
        pool: &PgPool,
        scoring: &dyn ScoringStrategy,
    ) -> AppResult<Vec<LeaderboardEntry>> {
        // Rows come back in account-creation order so ties keep a stable,
        // reproducible order after the sort.
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT
                u.full_name,
                u.email,
                COUNT(DISTINCT s.problem_id) FILTER (WHERE s.status = $1) AS solved
            FROM users u
            LEFT JOIN submissions s ON s.user_id = u.id
            GROUP BY u.id
            ORDER BY u.created_at
            "#,
        )
        .bind(crate::constants::statuses::SUBMITTED)
        .fetch_all(pool)
        .await?;

        Ok(Self::rank_users(rows, scoring))
    }

    /// Per-user problem counts
    pub async fn statistics(pool: &PgPool, user_id: &Uuid) -> AppResult<UserStatsResponse> {
        let total = ProblemRepository::count(pool).await?;
        let solved = SubmissionRepository::count_distinct_solved(pool, user_id).await?;

        Ok(UserStatsResponse {
            total,
            solved,
            remaining: total - solved,
        })
    }

    /// Sort by solved desc then rating desc (stable) and assign 1-based ranks
    fn rank_users(rows: Vec<LeaderboardRow>, scoring: &dyn ScoringStrategy) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = rows
            .into_iter()
            .map(|row| LeaderboardEntry {
                name: row.full_name,
                email: row.email,
                solved: row.solved,
                rating: scoring.rating(row.solved),
                rank: 0,
            })
            .collect();

        entries.sort_by(|a, b| b.solved.cmp(&a.solved).then(b.rating.cmp(&a.rating)));

        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = (index + 1) as i64;
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, solved: i64) -> LeaderboardRow {
        LeaderboardRow {
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            solved,
        }
    }

    #[test]
    fn test_linear_scoring() {
        let scoring = LinearScoring::default();
        assert_eq!(scoring.rating(0), 1500);
        assert_eq!(scoring.rating(5), 1550);
    }

    #[test]
    fn test_ranking_with_tie_keeps_insertion_order() {
        // Solved counts [3, 5, 5]: both fives outrank the three, and the
        // tie resolves by which account was created first.
        let rows = vec![row("Alice", 3), row("Bob", 5), row("Carol", 5)];

        let ranked = StatsService::rank_users(rows, &LinearScoring::default());

        assert_eq!(ranked[0].name, "Bob");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].name, "Carol");
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[2].name, "Alice");
        assert_eq!(ranked[2].rank, 3);

        assert_eq!(ranked[0].rating, ranked[1].rating);
        assert_eq!(ranked[2].rating, 1530);
    }

    #[test]
    fn test_ranking_empty_board() {
        let ranked = StatsService::rank_users(vec![], &LinearScoring::default());
        assert!(ranked.is_empty());
    }
}
