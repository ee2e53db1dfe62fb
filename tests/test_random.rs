#[test]
#[ignore]
fn test_f64_random_from_u64() {
    const N_ITER: u64 = 1 << 32;

    let mut rng = fastrand::Rng::with_seed(0);
    let mut buf = ryu::Buffer::new();
    for _ in 0..N_ITER {
        let a = f64::from_bits(rng.u64(..));
        let s = buf.format(a);
        let r = charconv::from_chars::<f64, _>(s);
        assert_eq!((r.status.is_ok(), r.consumed), (true, s.len()), "input {:?}", s);
        assert!(
            a == r.value || (a.is_nan() && r.value.is_nan()),
            "input {:?}: {} != {}",
            s,
            a,
            r.value
        );
    }
}
