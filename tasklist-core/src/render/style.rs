//! 交替行配色

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::TaskEntry;

/// 一组前景/背景配色
///
/// 颜色使用名称（如 `"grey"`）或 `#rrggbb`，由前端负责解析。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub background: String,
    pub foreground: String,
}

impl Scheme {
    pub fn new(background: impl Into<String>, foreground: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
        }
    }
}

/// 配色配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// 按位置循环使用的配色，默认两组
    pub schemes: Vec<Scheme>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            schemes: vec![
                Scheme::new("lightgrey", "black"),
                Scheme::new("grey", "white"),
            ],
        }
    }
}

/// 一行的渲染结果：条目、当前位置和分配到的配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRow<'a> {
    pub position: usize,
    pub entry: &'a TaskEntry,
    pub scheme: &'a Scheme,
}

/// 配色引擎
#[derive(Debug, Clone)]
pub struct StyleEngine {
    schemes: Vec<Scheme>,
}

impl StyleEngine {
    /// # Errors
    /// 配色列表为空时返回 `CoreError::ValidationError`。
    pub fn new(config: StyleConfig) -> CoreResult<Self> {
        if config.schemes.is_empty() {
            return Err(CoreError::ValidationError(
                "at least one color scheme is required".to_string(),
            ));
        }
        Ok(Self {
            schemes: config.schemes,
        })
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// 位置对应的配色：`schemes[position % schemes.len()]`
    pub fn style_for(&self, position: usize) -> &Scheme {
        &self.schemes[position % self.schemes.len()]
    }

    /// 为每个条目按当前位置重新分配配色
    ///
    /// 配色只取决于位置，删除一行后其后所有行的配色都会改变，
    /// 所以这里总是整体重算。
    pub fn recolor_all<'a>(&'a self, entries: &'a [TaskEntry]) -> Vec<StyledRow<'a>> {
        entries
            .iter()
            .enumerate()
            .map(|(position, entry)| StyledRow {
                position,
                entry,
                scheme: self.style_for(position),
            })
            .collect()
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self {
            schemes: StyleConfig::default().schemes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;

    fn entries(n: usize) -> Vec<TaskEntry> {
        (0..n)
            .map(|i| TaskEntry::new(TaskId::new(i as u64), format!("task {i}")))
            .collect()
    }

    #[test]
    fn default_has_two_alternating_schemes() {
        let engine = StyleEngine::default();
        assert_eq!(engine.schemes().len(), 2);
        assert_eq!(engine.style_for(0), &engine.schemes()[0]);
        assert_eq!(engine.style_for(1), &engine.schemes()[1]);
        assert_eq!(engine.style_for(2), &engine.schemes()[0]);
        assert_eq!(engine.style_for(7), &engine.schemes()[1]);
    }

    #[test]
    fn empty_schemes_are_rejected() {
        let result = StyleEngine::new(StyleConfig { schemes: vec![] });
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn three_scheme_cycle() {
        let engine = StyleEngine::new(StyleConfig {
            schemes: vec![
                Scheme::new("red", "white"),
                Scheme::new("green", "black"),
                Scheme::new("blue", "white"),
            ],
        })
        .unwrap();
        assert_eq!(engine.style_for(4).background, "green");
    }

    #[test]
    fn recolor_after_removal_stays_contiguous() {
        let engine = StyleEngine::default();
        let mut list = entries(5);
        list.remove(2);

        let rows = engine.recolor_all(&list);

        assert_eq!(rows.len(), 4);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.position, i);
            assert_eq!(row.scheme, &engine.schemes()[i % 2]);
        }
        // "task 3" moved from position 3 to 2
        assert_eq!(rows[2].entry.text, "task 3");
        assert_eq!(rows[2].scheme, engine.style_for(2));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: StyleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StyleConfig::default());

        let config: StyleConfig = serde_json::from_str(
            r##"{"schemes":[{"background":"#202020","foreground":"white"}]}"##,
        )
        .unwrap();
        assert_eq!(config.schemes.len(), 1);
    }
}
