pub mod point;
pub mod angles;
pub mod bolt_params;
pub mod bolt_error;
pub mod seeded_or_not;
pub mod rand_data;
