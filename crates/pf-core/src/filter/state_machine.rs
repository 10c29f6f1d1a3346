//! Filter state machine.
//!
//! Defines a pure state transition function for the project gallery controls.

use super::state::FilterState;

/// Events emitted by the gallery controls.
///
/// 画廊控件产生的事件。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEvent {
    /// Search box text changed.
    ///
    /// 搜索框内容变化。
    SetSearchText { text: String },
    /// A tag chip was clicked.
    ///
    /// 点击了标签。
    ToggleTag { tag: String },
    /// The show-all / show-less control was clicked.
    ///
    /// 点击了展开/收起按钮。
    ToggleExpanded,
}

/// Pure filter state machine.
///
/// 纯状态机：不包含副作用。
pub struct FilterStateMachine;

impl FilterStateMachine {
    pub fn transition(mut state: FilterState, event: CatalogEvent) -> FilterState {
        match event {
            CatalogEvent::SetSearchText { text } => state.set_search_text(text),
            CatalogEvent::ToggleTag { tag } => state.toggle_tag(&tag),
            CatalogEvent::ToggleExpanded => state.toggle_expanded(),
        }
        state
    }
}
