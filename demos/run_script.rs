//! Run a small script and print the final variables.

fn main() {
    let script = "\
width = 12;
height = width - 4;
area = width * height;
delta = height --- width;
";

    match assigncalc::run_str(script) {
        Ok(vars) => print!("{}", assigncalc::report::format(&vars)),
        Err(e) => eprintln!("{e}"),
    }
}
