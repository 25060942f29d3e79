//! Macros for declaring machine configurations.

/// Declare a [`MachineConfig`](crate::core::MachineConfig) literal.
///
/// Expands to a [`ConfigBuilder`](crate::builder::ConfigBuilder) chain and
/// evaluates to `Result<MachineConfig, BuildError>`.
///
/// # Example
///
/// ```
/// use waypoint::machine_config;
///
/// let config = machine_config! {
///     initial: green,
///     green { timer => yellow },
///     yellow { timer => red },
///     red { timer => green, fault => yellow },
/// }
/// .unwrap();
///
/// assert_eq!(config.initial(), "green");
/// assert_eq!(config.transition("red", "fault"), Some("yellow"));
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        $(
            $state:ident {
                $($event:ident => $target:ident),* $(,)?
            }
        ),* $(,)?
    ) => {
        $crate::builder::ConfigBuilder::new()
            .initial(stringify!($initial))
            $(
                .with_state(
                    stringify!($state),
                    &[$((stringify!($event), stringify!($target))),*],
                )
            )*
            .build()
    };
}
