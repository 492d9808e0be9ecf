//! 接口返回的数据结构。

use serde::Deserialize;

/// 项目列表中的单项。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub goal: u64,
    #[serde(default)]
    pub pledged: u64,
}

/// 单个项目详情。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub goal: u64,
    #[serde(default)]
    pub pledged: u64,
    #[serde(default)]
    pub creator: Option<String>,
}

/// 已筹比例（百分比，向下取整，目标为 0 时记为 0）。
pub fn funded_percent(pledged: u64, goal: u64) -> u64 {
    if goal == 0 {
        0
    } else {
        pledged.saturating_mul(100) / goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_zero_goal_and_overfunding() {
        assert_eq!(funded_percent(50, 0), 0);
        assert_eq!(funded_percent(250, 1000), 25);
        assert_eq!(funded_percent(1500, 1000), 150);
    }
}
