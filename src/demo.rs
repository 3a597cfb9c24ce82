//! Small worked examples of loose value arithmetic, the kind of expressions an
//! event-driven game script evaluates every frame.

use std::{io::Write, str::FromStr};

use log::{debug, info};

use crate::{coerce::format_number, errors::*, value::Value};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Demo {
    /// Text volume setting plus a numeric bonus.
    Volume,
    /// `(3 + 5) ^ 2`
    Power,
    /// Truthiness of the text volume setting, as `1` or `0`.
    Truthiness,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Volume, Demo::Power, Demo::Truthiness];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Volume => "volume",
            Demo::Power => "power",
            Demo::Truthiness => "truthiness",
        }
    }
}

impl FromStr for Demo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volume" => Ok(Demo::Volume),
            "power" => Ok(Demo::Power),
            "truthiness" => Ok(Demo::Truthiness),
            _ => bail!(ErrorKind::UnknownDemo(s.to_string())),
        }
    }
}

/// Inputs shared by the demos. Passed explicitly to every run.
#[derive(Debug, Clone)]
pub struct DemoContext {
    pub default_volume: Value,
    pub extra_volume: Value,
}

impl Default for DemoContext {
    fn default() -> Self {
        DemoContext {
            default_volume: Value::from("30"),
            extra_volume: Value::from(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub demo: Demo,
    pub value: Value,
}

impl DemoOutcome {
    pub fn number_text(&self) -> String {
        format_number(self.value.to_number())
    }

    pub fn text(&self) -> String {
        self.value.to_text()
    }
}

pub fn run(demo: Demo, context: &DemoContext) -> DemoOutcome {
    let value = match demo {
        Demo::Volume => &context.default_volume + &context.extra_volume,
        Demo::Power => {
            let base = Value::from(3.0 + 5.0);
            base.pow(&Value::from(2))
        }
        Demo::Truthiness => {
            if context.default_volume.to_boolean() {
                Value::from(1)
            } else {
                Value::from(0)
            }
        }
    };
    debug!("Demo {} produced {:?}", demo.name(), value);
    let outcome = DemoOutcome { demo, value };
    info!(
        "{}: NumberValue = {}, ToString = {}",
        demo.name(),
        outcome.number_text(),
        outcome.text()
    );
    outcome
}

pub fn run_all(demos: &[Demo], context: &DemoContext) -> Vec<DemoOutcome> {
    demos.iter().map(|demo| run(*demo, context)).collect()
}

pub fn write_report(outcomes: &[DemoOutcome], writer: &mut dyn Write) -> Result<()> {
    for outcome in outcomes {
        writeln!(
            writer,
            "{}: NumberValue = {}, ToString = {}",
            outcome.demo.name(),
            outcome.number_text(),
            outcome.text()
        )
        .chain_err(|| "Unable to write report")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::value::Kind;

    use super::*;

    fn utf8_to_string(bytes: &[u8]) -> String {
        match String::from_utf8(bytes.to_vec()) {
            Ok(s) => s,
            Err(_) => String::new(),
        }
    }

    #[test]
    fn volume_adds_numerically() {
        let outcome = run(Demo::Volume, &DemoContext::default());
        assert_eq!(Kind::Number, outcome.value.kind());
        assert_eq!("31", outcome.number_text());
        assert_eq!("31", outcome.text());
    }

    #[test]
    fn power_squares_the_sum() {
        let outcome = run(Demo::Power, &DemoContext::default());
        assert_eq!(64f64, outcome.value.to_number());
    }

    #[test]
    fn truthiness_depends_on_context() {
        let outcome = run(Demo::Truthiness, &DemoContext::default());
        assert_eq!("1", outcome.text());

        let context = DemoContext {
            default_volume: Value::from("0"),
            ..DemoContext::default()
        };
        assert_eq!("0", run(Demo::Truthiness, &context).text());
    }

    #[test]
    fn volume_concatenates_non_numeric_text() {
        let context = DemoContext {
            default_volume: Value::from("loud"),
            ..DemoContext::default()
        };
        let outcome = run(Demo::Volume, &context);
        assert_eq!("loud1", outcome.text());
        assert_eq!("NaN", outcome.number_text());
    }

    #[test]
    fn demo_names_parse() -> Result<()> {
        for demo in Demo::ALL.iter() {
            assert_eq!(*demo, demo.name().parse::<Demo>()?);
        }
        assert_eq!(Demo::Power, " POWER ".parse::<Demo>()?);
        match "volum".parse::<Demo>() {
            Err(Error(ErrorKind::UnknownDemo(name), _)) => assert_eq!("volum", name),
            other => panic!("unexpected result: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn report_lists_every_outcome() -> Result<()> {
        let mut buf = vec![];
        let outcomes = run_all(&Demo::ALL, &DemoContext::default());
        write_report(&outcomes, &mut buf)?;
        assert_eq!(
            r#"volume: NumberValue = 31, ToString = 31
power: NumberValue = 64, ToString = 64
truthiness: NumberValue = 1, ToString = 1
"#,
            utf8_to_string(&buf)
        );
        Ok(())
    }
}
