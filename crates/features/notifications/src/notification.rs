use crate::error::NotificationError;
use skit_domain::{NotificationArea, ViewContext};
use skit_kernel::requirement::Requirement;
use skit_kernel::resolver::Candidate;
use skit_kernel::Component;
use std::str::FromStr;
use strum::VariantNames;

/// Unvalidated registration input, as module code hands it over.
///
/// ```rust
/// use skit_domain::{NotificationArea, ViewContext};
/// use skit_kernel::{Component, Props};
/// use skit_notifications::NotificationSpec;
///
/// let spec = NotificationSpec::new(Component::new(|_: &Props| String::from("Hi")))
///     .area(NotificationArea::BannersAboveNav)
///     .view_context(ViewContext::MainDashboard)
///     .priority(11)
///     .dismissible(true);
/// assert_eq!(spec.area_slug, "notification-area-banners-above-nav");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationSpec {
    pub component: Option<Component>,
    pub area_slug: String,
    pub view_contexts: Vec<String>,
    pub priority: Option<i32>,
    pub check_requirements: Option<Requirement>,
    pub is_dismissible: bool,
}

impl NotificationSpec {
    #[must_use]
    pub fn new(component: Component) -> Self {
        Self { component: Some(component), ..Self::default() }
    }

    #[must_use]
    pub fn area(mut self, area: impl AsRef<str>) -> Self {
        self.area_slug = area.as_ref().to_owned();
        self
    }

    #[must_use]
    pub fn view_context(mut self, context: impl AsRef<str>) -> Self {
        self.view_contexts.push(context.as_ref().to_owned());
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn check_requirements(mut self, requirement: Requirement) -> Self {
        self.check_requirements = Some(requirement);
        self
    }

    #[must_use]
    pub const fn dismissible(mut self, dismissible: bool) -> Self {
        self.is_dismissible = dismissible;
        self
    }
}

/// A validated, registered notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub component: Component,
    pub area: NotificationArea,
    pub view_contexts: Vec<ViewContext>,
    pub priority: i32,
    pub check_requirements: Option<Requirement>,
    pub is_dismissible: bool,
}

impl Notification {
    /// Validates `spec`. A missing priority takes `default_priority`.
    ///
    /// # Errors
    /// [`NotificationError::Validation`] for a missing component, an unknown
    /// area or an unknown view context.
    pub fn from_spec(spec: NotificationSpec, default_priority: i32) -> Result<Self, NotificationError> {
        let component = spec.component.ok_or_else(|| {
            NotificationError::validation("Component is required to register a notification.")
        })?;

        let area = NotificationArea::from_str(&spec.area_slug).map_err(|_| {
            NotificationError::validation(format!(
                "Notification area should be one of: {}, but \"{}\" was provided.",
                NotificationArea::VARIANTS.join(", "),
                spec.area_slug
            ))
        })?;

        let view_contexts = spec
            .view_contexts
            .iter()
            .map(|context| {
                ViewContext::from_str(context).map_err(|_| {
                    NotificationError::validation(format!(
                        "Notification view context should be one of: {}, but \"{context}\" was provided.",
                        ViewContext::VARIANTS.join(", "),
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            component,
            area,
            view_contexts,
            priority: spec.priority.unwrap_or(default_priority),
            check_requirements: spec.check_requirements,
            is_dismissible: spec.is_dismissible,
        })
    }

    #[must_use]
    pub fn is_shown_in(&self, context: ViewContext) -> bool {
        self.view_contexts.contains(&context)
    }
}

impl Candidate for Notification {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn requirement(&self) -> Option<&Requirement> {
        self.check_requirements.as_ref()
    }

    fn is_dismissible(&self) -> bool {
        self.is_dismissible
    }

    fn shown_in(&self, context: &str) -> bool {
        self.view_contexts.iter().any(|v| v.as_ref() == context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skit_kernel::Props;

    fn component() -> Component {
        Component::new(|_: &Props| String::new())
    }

    #[test]
    fn missing_priority_takes_default() {
        let spec = NotificationSpec::new(component())
            .area(NotificationArea::Header)
            .view_context(ViewContext::Settings);
        let notification = Notification::from_spec(spec, 10).unwrap();
        assert_eq!(notification.priority, 10);
        assert!(notification.is_shown_in(ViewContext::Settings));
        assert!(!notification.shown_in("mainDashboard"));
    }

    #[test]
    fn area_error_lists_valid_areas() {
        let spec = NotificationSpec::new(component()).area("some-random-area");
        let err = Notification::from_spec(spec, 10).unwrap_err().to_string();
        assert!(err.starts_with("Notification area should be one of: notification-area-banners-above-nav"));
        assert!(err.ends_with("but \"some-random-area\" was provided."));
    }
}
