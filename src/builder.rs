/// A builder macro that creates an `IntMap` from a list of key-value pairs.
///
/// Keys are integer literals, negative ones included.
///
/// # Examples
///
/// This example creates an `IntMap` without specifying the capacity.
///
/// > Note: The map will be created with room for the listed pairs to avoid resizing.
///
/// ```
/// use intintmap::intmap;
///
/// let map = intmap! {
///     1: 10u32,
///     -2: 20,
///     0: 30,
/// };
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.capacity(), 8);
///
/// assert_eq!(map.get(1i64), Some(&10));
/// assert_eq!(map.get(-2), Some(&20));
/// assert_eq!(map.get(0), Some(&30));
/// ```
///
/// This example creates an `IntMap` with a specified capacity.
///
/// The capacity is specified before the key-value pairs.
///
/// > Note: The map will pre-allocate according to the `max` of the specified capacity and the
/// > number of key-value pairs to avoid resizing.
///
/// ```
/// use intintmap::intmap;
///
/// let map = intmap! {
///     20; // Capacity
///     1u8: 'a',
///     2: 'b',
/// };
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.capacity(), 32);
/// ```
#[macro_export]
macro_rules! intmap {
    // Pattern without explicit capacity.
    ( $( $key:literal : $value:expr ),* $(,)? ) => {
        {
            const KV_COUNT: usize = <[&str]>::len(&[$(stringify!($key)),*]);

            let mut map = $crate::IntMap::with_capacity(KV_COUNT);
            $(
                map.insert($key, $value);
            )*
            map
        }
    };
    // Pattern with explicit capacity.
    ( $capacity:expr; $( $key:literal : $value:expr ),* $(,)? ) => {
        {
            const KV_COUNT: usize = <[&str]>::len(&[$(stringify!($key)),*]);

            let capacity: usize = $capacity;

            let mut map = $crate::IntMap::with_capacity(if capacity > KV_COUNT {
                capacity
            } else {
                KV_COUNT
            });
            $(
                map.insert($key, $value);
            )*
            map
        }
    };
    // Catch-all pattern for invalid patterns.
    ( $($tt:tt)* ) => {
        compile_error!("Invalid syntax. Use `intmap! { key: value, ... }` or `intmap! { capacity; key: value, ... }`.");
    };
}
