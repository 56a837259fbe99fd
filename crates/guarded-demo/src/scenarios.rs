// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The walkthrough scenarios. Each one logs what it observes and leaves the
//! checks that decide correctness to the library's own tests.

use crate::report::Report;
use guarded_core::num::arithmetic::Arithmetic;
use guarded_core::utils::buffer::GuardedBuffer;
use guarded_core::value::Guarded;

type SafeSize = Guarded<usize>;
type SafeByte = Guarded<u8>;
type JustSigned = Guarded<i8>;
type JustFloat = Guarded<f32>;
type JustDouble = Guarded<f64>;

pub fn run_all(report: &mut Report) {
    comparators(report);
    vector_walk(report);
    different_types(report);
    try_to_trick(report);
    assignments(report);
    compatibility(report);
}

/// A buffer of `len` bytes, every one of them `'?'`.
fn byte_buffer(len: SafeSize) -> GuardedBuffer<u8> {
    GuardedBuffer::new(len, SafeByte::new(b'?'))
}

fn comparators(report: &mut Report) {
    report.scenario("comparators");

    let s1 = SafeSize::new(1);
    let s2 = SafeSize::new(2);
    report.log("s1 < s2", s1 < s2);
    report.log("s1 == s2", s1 == s2);

    // The one sanctioned way out of the wrapper.
    let size: usize = s1.into();
    report.log("usize::from(s1)", size);

    let f = 1.2f32;
    let d = 3.4f64;
    report.log("f64::from(f) < d", f64::from(f) < d);
}

fn vector_walk(report: &mut Report) {
    report.scenario("vector walk");

    let mut buffy = byte_buffer(SafeSize::new(0xF));
    report.log("buffy.len()", buffy.len());

    let mut walker = SafeSize::zero();
    let mut counter = SafeSize::zero();
    while walker < buffy.len() {
        // 'A' + (counter % 25), narrowed explicitly before it is wrapped.
        let letter = b'A' + (counter.get() % 25) as u8;
        buffy[walker] = SafeByte::new(letter);
        *counter.data_mut() += 1;
        *walker.data_mut() += 1;
    }

    let text: String = buffy.iter().map(|c| char::from(c.get())).collect();
    report.log("buffy", format!("{{ {text} }}"));
}

fn basic<T>(report: &mut Report, sample: T)
where
    T: Arithmetic + std::fmt::Display,
{
    let mut a = Guarded::<T>::default();
    let b = Guarded::new(sample);
    report.log(&format!("Guarded<{}>::default()", T::NAME), a);

    a = b;
    report.log(&format!("Guarded<{}>: a < b", T::NAME), a < b);
    report.log(&format!("Guarded<{}>: a == b", T::NAME), a == b);

    let peek: &T = b.data();
    report.log(&format!("Guarded<{}>::data()", T::NAME), peek);
}

fn different_types(report: &mut Report) {
    report.scenario("basics");

    basic(report, 1.2f32);
    basic(report, 3.4f64);

    basic(report, true);
    basic(report, 'c');
    basic(report, -7i8);
    basic(report, b'u');
    basic(report, 0x263Au16);
    basic(report, 0x1F600u32);

    basic(report, -300i16);
    basic(report, -70_000i32);
    basic(report, i64::MIN);
    basic(report, i128::MAX);
    basic(report, -1isize);

    basic(report, u16::MAX);
    basic(report, 70_000u32);
    basic(report, u64::MAX);
    basic(report, u128::MAX);
    basic(report, usize::MAX);
}

fn try_to_trick(report: &mut Report) {
    report.scenario("try to trick");

    let just_float_fun = |_arg: JustFloat| -> JustFloat { JustFloat::new(2.3) };
    let just_double_fun = |_arg: JustDouble| -> JustDouble { JustDouble::new(2.3) };

    // An unsuffixed literal takes the wrapped type; a typed `f64` would not.
    let jf = JustFloat::new(2.3f32);
    let jd = JustDouble::new(2.3);

    let jf_copy = jf;
    report.log("jf < jf_copy", jf < jf_copy);
    report.log("just_float_fun(jf)", just_float_fun(jf));
    report.log("just_double_fun(jd)", just_double_fun(jd));
}

fn assignments(report: &mut Report) {
    report.scenario("assignments");

    let mut s = JustSigned::default();
    let mut u = SafeByte::default();

    s.assign(b's' as i8);
    u.assign(b'u');

    report.log("s", s);
    report.log("u", u);
    report.log("char::from(u.get())", char::from(u.get()));
}

fn show_bytes(report: &mut Report, label: &str, bytes: impl IntoIterator<Item = u8>) {
    let text: Vec<String> = bytes.into_iter().map(|b| char::from(b).to_string()).collect();
    report.log(label, format!("{{ {} }}", text.join(" ")));
}

fn compatibility(report: &mut Report) {
    report.scenario("compatibility");

    let mut sarr = [JustSigned::default(); 3];
    let mut uarr = [SafeByte::default(); 3];
    for (slot, digit) in sarr.iter_mut().zip([b'9', b'8', b'7']) {
        slot.assign(digit as i8);
    }
    for (slot, digit) in uarr.iter_mut().zip([b'9', b'8', b'7']) {
        slot.assign(digit);
    }
    show_bytes(report, "[Guarded<i8>; 3]", sarr.iter().map(|c| c.get() as u8));
    show_bytes(report, "[Guarded<u8>; 3]", uarr.iter().map(|c| c.get()));

    let mut std_vec = vec![JustSigned::default(); 3];
    let mut std_arr = GuardedBuffer::from([JustSigned::default(); 3]);
    for (slot, letter) in std_vec.iter_mut().zip([b'A', b'B', b'C']) {
        slot.assign(letter as i8);
    }
    for (slot, letter) in std_arr.iter_mut().zip([b'A', b'B', b'C']) {
        slot.assign(letter as i8);
    }
    show_bytes(report, "Vec<Guarded<i8>>", std_vec.iter().map(|c| c.get() as u8));
    show_bytes(report, "GuardedBuffer<i8>", std_arr.iter().map(|c| c.get() as u8));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scenario_reports() {
        let mut report = Report::new();
        run_all(&mut report);
        assert!(report.rows() > 0);
    }

    #[test]
    fn test_byte_buffer_is_filled() {
        let buffy = byte_buffer(SafeSize::new(4));
        assert_eq!(buffy.len(), SafeSize::new(4));
        assert!(buffy.iter().all(|c| c.get() == b'?'));
    }
}
