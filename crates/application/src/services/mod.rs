mod random_root_selector;

pub use random_root_selector::RandomRootSelector;
