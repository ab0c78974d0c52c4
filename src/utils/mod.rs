pub mod fs_tree;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_log;
