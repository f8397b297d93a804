//! Interactive shell for the CLI frontend.
//!
//! Reads menu actions and component values line by line, re-prompting on
//! malformed or invalid input, and prints results. The shell is generic over
//! its input and output so it can be driven from a script in tests.

mod diagram;

pub use diagram::{render, render_rows};

use std::io::{BufRead, Write};

use num_complex::Complex64;
use tracing::warn;

use crate::components::{ComponentDef, ComponentKind, ComponentParams, Placement};
use crate::error::{CascadeError, Result};
use crate::notation::{format_complex, parse_impedance, parse_quantity};
use crate::solver::{Session, SessionContext};
use crate::DEFAULT_REFERENCE_IMPEDANCE;

/// Menu shown at startup, on `H` and after an unknown action.
pub const HELP: &str = "C: Add Capacitor\tL: Add Inductor\t\tR: Add Resistor\tT: Add Transmission Line\n\
P: Print Circuit\tD: Calculate Output\tX: Clear Data\tF: Set Frequency\tZ: Set Load\n\
H: Help\t\t\tQ: Quit";

const LOAD_PROMPT: &str = "Please enter the input (load) impedance in form a ± bj: ";
const FREQUENCY_PROMPT: &str = "Please enter a frequency in Hz: ";
const PLACEMENT_PROMPT: &str = "Series (se) or Shunt (sh): ";

/// Startup values supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellOptions {
    /// Load impedance; prompted for when absent
    pub load: Option<Complex64>,
    /// Frequency in Hz; prompted for when absent
    pub frequency: Option<f64>,
    /// Reference impedance for Γ and SWR
    pub reference_impedance: Complex64,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            load: None,
            frequency: None,
            reference_impedance: DEFAULT_REFERENCE_IMPEDANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented interactive session driver.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the shell and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `Q` or end of input.
    ///
    /// Returns the final session, or `None` when input ended before the load
    /// and frequency were known.
    pub fn run(&mut self, options: &ShellOptions) -> Result<Option<Session>> {
        let Some(mut session) = self.start(options)? else {
            return Ok(None);
        };

        writeln!(self.output, "Please enter an action.")?;
        writeln!(self.output, "{}", HELP)?;
        while self.step(&mut session)? == Flow::Continue {}

        Ok(Some(session))
    }

    fn start(&mut self, options: &ShellOptions) -> Result<Option<Session>> {
        let load = match options.load {
            Some(load) => load,
            None => match self.prompt_impedance(LOAD_PROMPT)? {
                Some(load) => load,
                None => return Ok(None),
            },
        };

        let context = match options.frequency {
            Some(frequency) => SessionContext::new(frequency)?,
            None => loop {
                let Some(frequency) = self.prompt_quantity(FREQUENCY_PROMPT)? else {
                    return Ok(None);
                };
                match SessionContext::new(frequency) {
                    Ok(context) => break context,
                    Err(e) => self.report(&e)?,
                }
            },
        };
        let context = context.with_reference_impedance(options.reference_impedance)?;

        Ok(Some(Session::new(context).with_load(load)))
    }

    fn step(&mut self, session: &mut Session) -> Result<Flow> {
        let Some(action) = self.read_line("Action: ")? else {
            return Ok(Flow::Quit);
        };
        let action = action.trim().to_lowercase();

        match action.as_str() {
            "q" => return Ok(Flow::Quit),
            "d" => self.calculate(session)?,
            "p" => write!(self.output, "{}", render(&session.listing()))?,
            "x" => {
                session.clear();
                writeln!(self.output, "Network cleared.")?;
            }
            "h" => writeln!(self.output, "{}", HELP)?,
            "f" => return self.change_frequency(session),
            "z" => return self.change_load(session),
            _ => {
                let mut chars = action.chars();
                match (chars.next().and_then(ComponentKind::from_tag), chars.next()) {
                    (Some(kind), None) => return self.add_component(session, kind),
                    _ => {
                        warn!(action = %action, "unknown action");
                        writeln!(self.output, "{}", HELP)?;
                    }
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn calculate(&mut self, session: &Session) -> Result<()> {
        match session.evaluate() {
            Ok(evaluation) => writeln!(self.output, "{}", evaluation)?,
            Err(e @ CascadeError::UnboundedSwr { .. }) => {
                if let Ok(z) = session.output_impedance() {
                    writeln!(self.output, "Impedance at Z₀: {} Ω", format_complex(z, 2))?;
                }
                self.report(&e)?;
            }
            Err(e) if e.is_recoverable() => self.report(&e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn add_component(&mut self, session: &mut Session, kind: ComponentKind) -> Result<Flow> {
        let placement = if kind.supports_shunt() {
            match self.prompt_placement()? {
                Some(placement) => placement,
                None => return Ok(Flow::Quit),
            }
        } else {
            writeln!(self.output, "Adding series transmission line...")?;
            Placement::Series
        };

        loop {
            let Some(params) = self.prompt_params(kind)? else {
                return Ok(Flow::Quit);
            };
            match session.add(&ComponentDef::new(params, placement)) {
                Ok(_) => {
                    writeln!(self.output, "Added {} {}.", placement, kind)?;
                    return Ok(Flow::Continue);
                }
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn prompt_params(&mut self, kind: ComponentKind) -> Result<Option<ComponentParams>> {
        let params = match kind {
            ComponentKind::Capacitor => self
                .prompt_quantity("Please enter a capacitance in Farad: ")?
                .map(|capacitance| ComponentParams::Capacitor { capacitance }),
            ComponentKind::Inductor => self
                .prompt_quantity("Please enter an inductance in Henry: ")?
                .map(|inductance| ComponentParams::Inductor { inductance }),
            ComponentKind::Resistor => self
                .prompt_quantity("Please enter the resistance in Ohm: ")?
                .map(|resistance| ComponentParams::Resistor { resistance }),
            ComponentKind::TransmissionLine => {
                let Some(length) = self.prompt_quantity("Please enter the length in meters: ")? else {
                    return Ok(None);
                };
                let Some(characteristic_impedance) = self
                    .prompt_impedance("Please enter the characteristic impedance in the form a ± bj: ")?
                else {
                    return Ok(None);
                };
                let Some(velocity_factor) =
                    self.prompt_quantity("Please enter the Velocity Factor as a fraction of c: ")?
                else {
                    return Ok(None);
                };
                Some(ComponentParams::TransmissionLine {
                    length,
                    characteristic_impedance,
                    velocity_factor,
                })
            }
        };
        Ok(params)
    }

    fn change_frequency(&mut self, session: &mut Session) -> Result<Flow> {
        let Some(frequency) = self.prompt_quantity(FREQUENCY_PROMPT)? else {
            return Ok(Flow::Quit);
        };
        match session.set_frequency(frequency) {
            Ok(()) => writeln!(self.output, "Frequency set to {} Hz.", frequency)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn change_load(&mut self, session: &mut Session) -> Result<Flow> {
        let Some(load) = self.prompt_impedance(LOAD_PROMPT)? else {
            return Ok(Flow::Quit);
        };
        session.set_load(load);
        writeln!(self.output, "Load set to {} Ω.", format_complex(load, 2))?;
        Ok(Flow::Continue)
    }

    fn prompt_impedance(&mut self, prompt: &str) -> Result<Option<Complex64>> {
        self.prompt_with(prompt, parse_impedance)
    }

    fn prompt_quantity(&mut self, prompt: &str) -> Result<Option<f64>> {
        self.prompt_with(prompt, parse_quantity)
    }

    fn prompt_placement(&mut self) -> Result<Option<Placement>> {
        self.prompt_with(PLACEMENT_PROMPT, Placement::parse)
    }

    /// Prompt until `parse` accepts a line. `None` means input ended.
    fn prompt_with<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    self.report(&e)?;
                    if matches!(e, CascadeError::ImpedanceSyntax { .. }) {
                        writeln!(self.output, "Ensure that you are inserting j after the number")?;
                    }
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn report(&mut self, err: &CascadeError) -> Result<()> {
        warn!(kind = ?err.kind(), "{}", err);
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, options: ShellOptions) -> (Option<Session>, String) {
        let mut shell = Shell::new(script.as_bytes(), Vec::new());
        let session = shell.run(&options).unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (session, output)
    }

    #[test]
    fn test_series_resistor_scenario() {
        let (session, output) = run_script("50+0j\n100e6\nr\nse\n25\nd\nq\n", ShellOptions::default());
        let session = session.unwrap();
        assert_eq!(session.circuit().len(), 1);
        assert!(output.contains("Added series resistor."));
        assert!(output.contains("Impedance at Z₀: 75.00+0.00j Ω"));
        assert!(output.contains("Reflection coefficient: -0.20+0.00j"));
        assert!(output.contains("SWR relative to 50.00+0.00j Ω: 1.5:1"));
    }

    #[test]
    fn test_options_skip_startup_prompts() {
        let options = ShellOptions {
            load: Some(Complex64::new(30.0, -40.0)),
            frequency: Some(100e6),
            ..ShellOptions::default()
        };
        let (session, output) = run_script("d\n", options);
        assert!(session.is_some());
        assert!(!output.contains(LOAD_PROMPT));
        assert!(output.contains("Impedance at Z₀: 30.00-40.00j Ω"));
        assert!(output.contains("3.0:1"));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let script = "abc\n50\nzero\n-1\n100e6\nc\nparallel\nsh\n0\n1e-12\np\nq\n";
        let (session, output) = run_script(script, ShellOptions::default());
        let session = session.unwrap();

        assert_eq!(session.load(), Complex64::new(50.0, 0.0));
        assert_eq!(session.frequency(), 100e6);
        assert_eq!(session.circuit().len(), 1);
        assert_eq!(session.listing()[0].kind, ComponentKind::Capacitor);
        assert_eq!(session.listing()[0].placement, Placement::Shunt);

        assert!(output.contains("Ensure that you are inserting j after the number"));
        assert!(output.contains("Error: Invalid frequency -1 Hz"));
        assert!(output.contains("Error: Invalid placement 'parallel'"));
        assert!(output.contains("Error: Invalid capacitance for capacitor: 0"));
        assert!(output.contains("Zi — \\/ — Zo\n     C1\n"));
    }

    #[test]
    fn test_transmission_line_is_series_only() {
        let script = "100+0j\n100e6\nt\n0.7494811450\n50\n1\nd\nq\n";
        let (session, output) = run_script(script, ShellOptions::default());
        let session = session.unwrap();
        assert!(output.contains("Adding series transmission line..."));
        assert!(!output.contains(PLACEMENT_PROMPT));
        assert_eq!(session.listing()[0].placement, Placement::Series);
        assert!(output.contains("Impedance at Z₀: 25.00"));
    }

    #[test]
    fn test_domain_fault_does_not_end_session() {
        let script = "0\n100e6\nr\nsh\n50\nd\nz\n50\nd\nq\n";
        let (session, output) = run_script(script, ShellOptions::default());
        assert!(session.is_some());
        assert!(output.contains("Error: Stage 0 (R1): Divide by zero"));
        assert!(output.contains("Impedance at Z₀: 25.00+0.00j Ω"));
    }

    #[test]
    fn test_total_reflection_still_shows_impedance() {
        let script = "0+25j\n100e6\nd\nq\n";
        let (_, output) = run_script(script, ShellOptions::default());
        assert!(output.contains("Impedance at Z₀: 0.00+25.00j Ω"));
        assert!(output.contains("Error: SWR is unbounded"));
    }

    #[test]
    fn test_frequency_locked_then_cleared() {
        let script = "50\n1e6\nl\nse\n1e-6\nf\n2e6\nx\nf\n2e6\nq\n";
        let (session, output) = run_script(script, ShellOptions::default());
        let session = session.unwrap();
        assert!(output.contains("Error: Frequency is locked at 1000000 Hz"));
        assert!(output.contains("Network cleared."));
        assert_eq!(session.frequency(), 2e6);
        assert!(session.circuit().is_empty());
    }

    #[test]
    fn test_unknown_action_prints_help() {
        let (_, output) = run_script("50\n1e6\nwhat\nq\n", ShellOptions::default());
        // Once at startup, once for the unknown action.
        assert_eq!(output.matches("C: Add Capacitor").count(), 2);
    }

    #[test]
    fn test_end_of_input_before_setup() {
        let (session, _) = run_script("50+0j\n", ShellOptions::default());
        assert!(session.is_none());
    }

    #[test]
    fn test_end_of_input_mid_component() {
        let (session, _) = run_script("50\n1e6\nc\nsh\n", ShellOptions::default());
        assert!(session.unwrap().circuit().is_empty());
    }
}
