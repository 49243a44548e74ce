use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;

use super::*;
use crate::solver::core::traits::InfoPrint;
use crate::timers::*;
use std::time::Duration;

impl<T> ConfigurablePrintTarget for DefaultInfo<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

const RULE: &str =
    "------------------------------------------------------------------------------------------";

impl<T> InfoPrint<T> for DefaultInfo<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type SE = DefaultSettings<T>;

    fn print_configuration(
        &mut self,
        settings: &DefaultSettings<T>,
        data: &DefaultProblemData<T>,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        _print_banner(out)?;

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  variables     = {}", data.n)?;
        writeln!(out, "  constraints   = {}", data.m)?;
        writeln!(out, "  nnz(A)        = {}", data.A.nnz())?;

        writeln!(out,)?;

        self.print_settings(settings)?;

        std::io::Result::Ok(())
    }

    fn print_status_header(&mut self, settings: &DefaultSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        //print a subheader for the iterations info
        write!(out, "iter    ")?;
        write!(out, "objective    ")?;
        write!(out, "ρ_p       ")?;
        write!(out, "ρ_d       ")?;
        write!(out, "ρ_A       ")?;
        write!(out, "ρ_g       ")?;
        write!(out, "ρ_μ       ")?;
        write!(out, "γ         ")?;
        write!(out, "step      ")?;
        writeln!(out,)?;
        writeln!(out, "{}", RULE)?;
        out.flush()?;
        std::io::Result::Ok(())
    }

    fn print_status(&mut self, settings: &DefaultSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        write!(out, "{:>3}  ", self.iterations)?;
        write!(out, "{}  ", expformat!("{:+8.4e}", self.obj))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.rho_p))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.rho_d))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.rho_A))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.rho_g))?;
        write!(out, "{}  ", expformat!("{:6.2e}", self.rho_mu))?;

        if self.iterations > 0 {
            write!(out, "{}  ", expformat!("{:6.2e}", self.gamma))?;
            write!(out, "{}  ", expformat!("{:>.2e}", self.step_length))?;
        } else {
            write!(out, " ------    ")?; //info.gamma
            write!(out, " ------   ")?; //info.step_length
        }

        writeln!(out,)?;

        std::io::Result::Ok(())
    }

    fn print_footer(
        &mut self,
        settings: &DefaultSettings<T>,
        timers: &Timers,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "{}", RULE)?;

        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(out, "  {}", self.status.message())?;

        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        timers.print(out)?;

        out.flush()?;

        std::io::Result::Ok(())
    }
}

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    fn print_settings(&mut self, settings: &DefaultSettings<T>) -> std::io::Result<()> {
        let out = &mut self.stream;

        let set = settings;

        writeln!(out, "settings:")?;

        writeln!(
            out,
            "  linear algebra: dense normal equations / cholesky, precision: {} bit",
            _get_precision_string::<T>()
        )?;

        let time_lim_str = {
            if set.time_limit.is_infinite() {
                "Inf".to_string()
            } else {
                format!("{:?}", set.time_limit)
            }
        };
        writeln!(
            out,
            "  max iter = {}, time limit = {},  max step = {:.5}",
            set.max_iter, time_lim_str, set.max_step_fraction
        )?;

        writeln!(
            out,
            "  tol = {:.1e}, centering cap = {:.3}",
            set.tol, set.centering_cap
        )?;

        writeln!(out,)?;

        std::io::Result::Ok(())
    }
}

fn _print_banner(out: &mut PrintTarget) -> std::io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "       hsdlp v{}  -  homogeneous self-dual interior point LP solver",
        crate::VERSION
    )?;
    writeln!(out, "{}", RULE)?;
    std::io::Result::Ok(())
}

fn _get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}

// convert a string in LowerExp display format into one that
// 1) always has a sign after the exponent, and
// 2) has at least two digits in the exponent.

fn _exp_str_reformat(mut thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let has_sign = thestr[eidx + 1..].starts_with('-');

    let has_short_exp = {
        if !has_sign {
            thestr.len() == eidx + 2
        } else {
            thestr.len() == eidx + 3
        }
    };

    let chars;
    if !has_sign {
        if has_short_exp {
            chars = "+0";
        } else {
            chars = "+";
        }
    } else if has_short_exp {
        chars = "0";
    } else {
        chars = "";
    }

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat("1.00e3".to_string()), "1.00e+03");
    assert_eq!(_exp_str_reformat("1.00e-3".to_string()), "1.00e-03");
    assert_eq!(_exp_str_reformat("1.00e-12".to_string()), "1.00e-12");
    assert_eq!(_exp_str_reformat("1.00e123".to_string()), "1.00e+123");
    assert_eq!(_exp_str_reformat("NaN".to_string()), "NaN");
}

#[test]
fn test_print_status_row() {
    use crate::solver::core::SolverStatus;

    let settings = DefaultSettings::<f64> {
        verbose: true,
        ..DefaultSettings::default()
    };
    let mut info = DefaultInfo::<f64>::new();
    info.print_to_buffer();

    info.iterations = 2;
    info.obj = -1.5;
    info.rho_p = 1e-3;
    info.status = SolverStatus::Solved;
    info.print_status(&settings).unwrap();

    let mut timers = Timers::default();
    timeit! {timers => "solve"; {
        timeit! {timers => "IP iteration"; {}}
    }}
    info.print_footer(&settings, &timers).unwrap();

    let buf = info.get_print_buffer().unwrap();
    assert!(buf.starts_with("  2  -1.5000e+00  1.00e-03"));
    assert!(buf.contains("Terminated with status = Solved"));
    assert!(buf.contains("\nsolve : "));
    assert!(buf.contains("\n    IP iteration : "));

    // silent when not verbose
    let mut info = DefaultInfo::<f64>::new();
    info.print_to_buffer();
    info.print_footer(&DefaultSettings::default(), &timers)
        .unwrap();
    assert_eq!(info.get_print_buffer().unwrap(), "");
}
