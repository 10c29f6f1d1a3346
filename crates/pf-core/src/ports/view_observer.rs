use crate::view::CatalogView;

/// Receives every view the controller derives.
///
/// Called synchronously after each state change, before the operation
/// returns.
/// 每次状态变化后同步回调。
pub trait ViewObserverPort: Send + Sync {
    fn on_view_changed(&self, view: &CatalogView);
}
