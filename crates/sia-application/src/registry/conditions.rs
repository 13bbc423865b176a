//! Detection Conditions
//!
//! Ready-made conditions for the common ways of recognising which mapping
//! library a model class is built on.

use sia_domain::ModelClass;

/// Matches every model class
pub fn always(_model: &ModelClass) -> bool {
    true
}

/// Matches no model class
pub fn never(_model: &ModelClass) -> bool {
    false
}

/// Matches classes that are, or inherit from, `marker`
///
/// ```rust
/// use sia_application::registry::conditions::descends_from;
/// use sia_domain::ModelClass;
///
/// let condition = descends_from("ActiveRecord::Base");
/// assert!(condition(&ModelClass::new("Article").with_ancestor("ActiveRecord::Base")));
/// assert!(!condition(&ModelClass::new("Article")));
/// ```
pub fn descends_from(
    marker: impl Into<String>,
) -> impl Fn(&ModelClass) -> bool + Send + Sync + 'static {
    let marker = marker.into();
    move |model: &ModelClass| model.descends_from(&marker)
}

/// Matches the class called `name` only
pub fn named(name: impl Into<String>) -> impl Fn(&ModelClass) -> bool + Send + Sync + 'static {
    let name = name.into();
    move |model: &ModelClass| model.name() == name
}
