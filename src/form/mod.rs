mod binder;
mod collection;
mod components;
mod factory;

pub use binder::Binder;
pub use collection::{CollectionFieldAdapter, CollectionView, ItemLabelGenerator};
pub use components::WidgetKind;
pub use factory::WidgetFactory;

pub(crate) use components::FieldWidget;
