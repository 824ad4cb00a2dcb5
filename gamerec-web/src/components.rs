pub mod related_games;
