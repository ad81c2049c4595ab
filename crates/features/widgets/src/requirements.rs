//! Reusable widget requirements.

use skit_domain::constants::{
    AREA_MAIN_DASHBOARD_KEY_METRICS_PRIMARY, CONTEXT_MAIN_DASHBOARD_KEY_METRICS, MODULE_ANALYTICS_4,
};
use skit_kernel::requirement::{Requirement, RequirementError};

/// Eligibility of a "connect this module" key-metrics CTA.
///
/// Holds when the user finished the user-input flow, `module` is known but not
/// connected, and at least `threshold` key metric widgets in `area`/`context`
/// depend on it. When the user picked key metrics only picked widgets count.
///
/// An unknown user-input status is an error, so the CTA stays hidden until it
/// is loaded.
#[must_use]
pub fn connect_module_cta(
    module: impl Into<String>,
    area: impl Into<String>,
    context: impl Into<String>,
    threshold: usize,
) -> Requirement {
    let module = module.into();
    let area = area.into();
    let context = context.into();

    Requirement::new(move |ctx| {
        let completed = ctx
            .state
            .user
            .user_input_completed
            .ok_or_else(|| RequirementError::unresolved("user input completion"))?;
        if !completed {
            return Ok(false);
        }

        let Some(state) = ctx.state.module(&module) else {
            return Ok(false);
        };
        if state.active && state.connected {
            return Ok(false);
        }

        let dependents = ctx
            .catalog
            .entities_for_area_in_context(&area, &context)
            .iter()
            .filter(|widget| ctx.state.user.selects_key_metric(widget))
            .filter(|widget| ctx.catalog.modules_of(widget).iter().any(|m| *m == module))
            .count();

        Ok(dependents >= threshold)
    })
}

/// The Analytics CTA on the main dashboard's key metrics.
#[must_use]
pub fn connect_analytics_cta(threshold: usize) -> Requirement {
    connect_module_cta(
        MODULE_ANALYTICS_4,
        AREA_MAIN_DASHBOARD_KEY_METRICS_PRIMARY,
        CONTEXT_MAIN_DASHBOARD_KEY_METRICS,
        threshold,
    )
}
