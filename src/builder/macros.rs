//! Macros for ergonomic state table construction.

/// Build a [`StateTable`](crate::core::StateTable) from a literal description.
///
/// States are listed in table order; each maps event names to targets.
///
/// # Example
///
/// ```
/// use retrace::state_table;
///
/// let table = state_table! {
///     off => { turnOn => on },
///     on => { turnOff => off, dim => dimmed },
///     dimmed => {},
/// };
///
/// assert_eq!(table.len(), 3);
/// assert!(table.get("on").unwrap().target("dim").is_some());
/// ```
#[macro_export]
macro_rules! state_table {
    (
        $(
            $state:ident => { $( $event:ident => $target:ident ),* $(,)? }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::core::StateTable::new();
        $(
            table.insert(
                stringify!($state),
                $crate::core::StateDefinition::new()
                    $( .on(stringify!($event), stringify!($target)) )*,
            );
        )*
        table
    }};
}
