use serde::{Deserialize, Serialize};

closed_enum! {
    CourseLevel {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub level: CourseLevel,
    pub duration: String,
    pub rating: f64,
    #[serde(default)]
    pub enrolled_count: u32,
    /// Whole currency units; zero means the course is free.
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub lessons: u32,
    #[serde(default)]
    pub enrolled: bool,
    pub description: String,
}

impl CourseRecord {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}
