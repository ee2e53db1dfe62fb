#[test]
#[ignore]
fn test_f32_exhaustive_ryu() {
    let mut buf = ryu::Buffer::new();
    for i in 0..=u32::MAX {
        let a = f32::from_bits(i);
        let s = buf.format(a);
        let r = charconv::from_chars::<f32, _>(s);
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
