use rand::Rng;

/// Standard benchmark input sizes
#[allow(dead_code)]
#[derive(Clone, Copy, Debug)]
pub enum DatasetSize {
    Small,  // 100 values
    Medium, // 1_000 values
    Large,  // 10_000 values
}

impl DatasetSize {
    pub fn value_count(&self) -> usize {
        match self {
            DatasetSize::Small => 100,
            DatasetSize::Medium => 1_000,
            DatasetSize::Large => 10_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatasetSize::Small => "small",
            DatasetSize::Medium => "medium",
            DatasetSize::Large => "large",
        }
    }
}

/// Random integers in the same range the sort comparison harness uses
pub fn random_values(size: DatasetSize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..size.value_count())
        .map(|_| rng.gen_range(-100_000..100_000))
        .collect()
}
