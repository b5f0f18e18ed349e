use super::*;

#[test]
fn same_seed_same_sequence() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn unit_interval_is_half_open() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v), "{v}");
    }
}

#[test]
fn entropy_generators_diverge() {
    let mut a = Rng64::from_entropy();
    let mut b = Rng64::from_entropy();
    assert_ne!(a.next_u64(), b.next_u64());
}
