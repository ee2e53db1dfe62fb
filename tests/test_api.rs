use charconv::{
    from_chars, from_chars_fmt, from_chars_radix, from_chars_ws, from_chars_ws_radix, FloatFormat,
    Status,
};

macro_rules! check_ok {
    ($s:expr, $x:expr) => {
        let s = $s;
        check_ok!(s, $x, f32);
        check_ok!(s.as_bytes(), $x, f32);
        check_ok!(s, $x, f64);
        check_ok!(s.as_bytes(), $x, f64);
    };
    ($s:expr, $x:expr, $ty:ty) => {
        let r = from_chars::<$ty, _>($s);
        assert_eq!(r.ok(), Some(($x, $s.len())));
    };
}

macro_rules! check_ok_partial {
    ($s:expr, $x:expr, $n:expr) => {
        let s = $s;
        check_ok_partial!(s, $x, $n, f32);
        check_ok_partial!(s.as_bytes(), $x, $n, f32);
        check_ok_partial!(s, $x, $n, f64);
        check_ok_partial!(s.as_bytes(), $x, $n, f64);
    };
    ($s:expr, $x:expr, $n:expr, $ty:ty) => {
        let r = from_chars::<$ty, _>($s);
        assert_eq!(r.ok(), Some(($x, $n)));
    };
}

macro_rules! check_err {
    ($s:expr) => {
        let s = $s;
        check_err!(s, f32);
        check_err!(s.as_bytes(), f32);
        check_err!(s, f64);
        check_err!(s.as_bytes(), f64);
    };
    ($s:expr, $ty:ty) => {
        let r = from_chars::<$ty, _>($s);
        assert_eq!(r.status, Status::InvalidArgument);
        assert_eq!(r.consumed, 0);
        assert_eq!(r.value, <$ty>::default());
    };
}

#[test]
fn test_api() {
    check_ok!("1.23", 1.23);
    check_ok!("0.", 0.);
    check_ok!("-0", 0.);
    check_ok!("+00", 0.);
    check_ok!("-0001e-02", -0.01);
    check_ok!("345", 345.);

    check_ok_partial!("1a", 1., 1);
    check_ok_partial!("-2e-1x", -0.2, 5);
    check_ok_partial!("2e2.", 200., 3);
    check_ok_partial!("2ea", 2., 1);
    check_ok_partial!("1..0", 1., 2);
    check_ok_partial!("12.5rem", 12.5, 4);

    check_err!("");
    check_err!(" ");
    check_err!(".");
    check_err!(".e1");
    check_err!("+");
    check_err!("-");
    check_err!("x");
    check_err!("abc");
    check_err!("a123");
    check_err!("e10");
    check_err!("+e1");
    check_err!("in");
    check_err!("na");
}

#[test]
fn test_special_tokens() {
    let r = from_chars::<f64, _>("nan");
    assert!(r.value.is_nan());
    assert_eq!(r.value.to_bits(), 0x7FF8_0000_0000_0000);
    assert_eq!((r.consumed, r.status), (3, Status::Ok));

    let r = from_chars::<f64, _>("-NaN");
    assert!(r.value.is_nan());
    assert_eq!(r.value.to_bits(), 0xFFF8_0000_0000_0000);
    assert_eq!(r.consumed, 4);

    let r = from_chars::<f32, _>("+nAn");
    assert!(r.value.is_nan());
    assert_eq!(r.value.to_bits(), 0x7FC0_0000);
    assert_eq!(r.consumed, 4);

    assert_eq!(from_chars::<f64, _>("inf").ok(), Some((f64::INFINITY, 3)));
    assert_eq!(from_chars::<f64, _>("INF").ok(), Some((f64::INFINITY, 3)));
    assert_eq!(from_chars::<f64, _>("-inf").ok(), Some((f64::NEG_INFINITY, 4)));
    assert_eq!(from_chars::<f64, _>("infinity").ok(), Some((f64::INFINITY, 8)));
    assert_eq!(from_chars::<f64, _>("-Infinity").ok(), Some((f64::NEG_INFINITY, 9)));
    assert_eq!(from_chars::<f32, _>("-infinity").ok(), Some((f32::NEG_INFINITY, 9)));

    // The three-byte token stands alone when the long form does not fit,
    // and trailing garbage after a matched token stays unconsumed.
    assert_eq!(from_chars::<f64, _>("infini").ok(), Some((f64::INFINITY, 3)));
    assert_eq!(from_chars::<f64, _>("infinityy").ok(), Some((f64::INFINITY, 8)));

    let r = from_chars::<f64, _>("nansense");
    assert!(r.value.is_nan());
    assert_eq!((r.consumed, r.status), (3, Status::Ok));
}

#[test]
fn test_formats() {
    assert_eq!(FloatFormat::default(), FloatFormat::General);
    assert_eq!(from_chars_fmt::<f64, _>("1.5", FloatFormat::General).ok(), Some((1.5, 3)));
    for fmt in [FloatFormat::Scientific, FloatFormat::Fixed, FloatFormat::Hex] {
        let r = from_chars_fmt::<f64, _>("1.5", fmt);
        assert_eq!((r.status, r.consumed), (Status::InvalidArgument, 0));
        let r = from_chars_fmt::<f32, _>("1.5", fmt);
        assert_eq!((r.status, r.consumed), (Status::InvalidArgument, 0));
    }
}

#[test]
fn test_whitespace_variants() {
    let r = from_chars_ws::<f32, _>("  \t\n-12.5");
    assert_eq!(r.ok(), Some((-12.5_f32, 9)));

    let r = from_chars_ws::<f64, _>("\x0b\x0c 2.5e1");
    assert_eq!(r.ok(), Some((25.0, 8)));

    // No whitespace to skip behaves exactly like from_chars.
    assert_eq!(from_chars_ws::<f64, _>("7").ok(), Some((7.0, 1)));

    // Whitespace alone is not a number.
    assert_eq!(from_chars_ws::<f64, _>("   ").status, Status::InvalidArgument);
    assert_eq!(from_chars_ws::<f64, _>("  x").status, Status::InvalidArgument);

    // Interior whitespace still terminates the number.
    assert_eq!(from_chars_ws::<f64, _>(" 1 2").ok(), Some((1.0, 2)));

    assert_eq!(from_chars_ws::<i64, _>("\t-42").ok(), Some((-42, 4)));
    assert_eq!(from_chars_ws_radix::<u32, _>("  ff", 16).ok(), Some((255, 4)));

    // Any whitespace prefix leaves value and status untouched and shifts
    // the consumed count by the prefix length.
    for s in ["1.5", "-2e8", "nan", "1e9999", "x"] {
        let prefixed = format!(" \t\r\n{}", s);
        let bare = from_chars::<f64, _>(s);
        let ws = from_chars_ws::<f64, _>(prefixed.as_str());
        assert_eq!(ws.status, bare.status);
        assert_eq!(ws.consumed, bare.consumed + 4);
        assert_eq!(ws.value.to_bits(), bare.value.to_bits());
    }
}

#[test]
fn test_integer_api() {
    assert_eq!(from_chars::<i64, _>("-123").ok(), Some((-123_i64, 4)));
    assert_eq!(from_chars::<u64, _>("123").ok(), Some((123_u64, 3)));
    assert_eq!(from_chars::<i32, _>("-2147483648").ok(), Some((i32::MIN, 11)));
    assert_eq!(from_chars_radix::<u32, _>("ff", 16).ok(), Some((255_u32, 2)));
    assert_eq!(from_chars_radix::<u64, _>("Zz", 36).ok(), Some((35 * 36 + 35, 2)));

    let r = from_chars::<i32, _>("2147483648");
    assert_eq!((r.status, r.consumed), (Status::OutOfRange, 10));

    // Floats accept a decimal point; integers stop right before it.
    assert_eq!(from_chars::<i64, _>("12.5").ok(), Some((12_i64, 2)));
}

#[test]
fn test_sign_symmetry() {
    for s in ["0", "1", "12.5", "1e10", "3.25e-4", "inf", "12345678901234567890123"] {
        let plus = format!("+{}", s);
        let minus = format!("-{}", s);
        let base = from_chars::<f64, _>(s);
        let p = from_chars::<f64, _>(plus.as_str());
        let m = from_chars::<f64, _>(minus.as_str());
        assert_eq!(p.status, base.status);
        assert_eq!(m.status, base.status);
        assert_eq!(p.consumed, base.consumed + 1);
        assert_eq!(m.consumed, base.consumed + 1);
        assert_eq!(p.value, base.value);
        assert_eq!(m.value, -base.value);
        assert_eq!(m.value.to_bits(), base.value.to_bits() ^ (1 << 63));
    }
}
