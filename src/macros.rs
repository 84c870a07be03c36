// Declares a built-in table from `key => value` literals. Keys are checked at
// compile time: a table whose keys are empty, duplicated, or out of order
// does not build.
macro_rules! table {
    (
        $(#[$meta:meta])*
        $vis:vis const $name:ident = {
            $($key:literal => $value:literal),* $(,)?
        };
    ) => {
        $(#[$meta])*
        $vis const $name: &[crate::table::Entry] = &[
            $(crate::table::Entry::from_static($key, $value)),*
        ];

        const _: () = assert!(
            crate::table::is_strictly_ascending(&[$($key),*]),
            concat!("keys of `", stringify!($name), "` must be non-empty, unique and sorted")
        );
    };
}
