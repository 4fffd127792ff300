use rhai::{
    Engine,
    packages::{Package, StandardPackage},
};

use crate::config::ProviderConfig;

/// Build a fresh engine with the standard package and configured limits.
///
/// A raw engine is used so nothing beyond the standard package leaks into
/// scripts. Strict variables turn undefined references into errors instead
/// of silently producing unit values.
pub(crate) fn build_engine(config: &ProviderConfig) -> Engine {
    let mut engine = Engine::new_raw();
    engine.register_global_module(StandardPackage::new().as_shared_module());

    engine.set_strict_variables(true);
    engine.set_fail_on_invalid_map_property(true);

    engine.set_max_operations(config.max_operations);
    engine.set_max_call_levels(config.max_call_levels);
    engine.set_max_expr_depths(config.max_expr_depth, config.max_function_expr_depth);
    engine.set_max_string_size(config.max_string_size);
    engine.set_max_array_size(config.max_array_size);
    engine.set_max_map_size(config.max_map_size);
    engine.set_max_variables(config.max_variables);
    engine.set_max_functions(config.max_functions);
    engine.set_max_modules(config.max_modules);

    engine
}
