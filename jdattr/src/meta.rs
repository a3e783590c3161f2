use crate::Result;
use chrono::{DateTime, TimeZone};
use jdump::Emitter;

use core::fmt::Display;
use std::io::Write;

/// Write an object recording how and when a sample was taken.
///
/// `cmdline` holds the arguments joined by single spaces, `time_human`
/// the time in `ctime` layout (newline included) and `time_unix` the
/// seconds since the epoch.
pub fn dump_meta_info<W, S, Tz>(jd: &mut Emitter<W>, args: &[S], now: &DateTime<Tz>) -> Result<()>
where
    W: Write,
    S: AsRef<str>,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    jd.put_object()?;

    jd.put_key("cmdline")?;
    {
        let mut slot = jd.reserve_value()?;
        slot.write_raw(b"\"")?;
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                slot.write_raw(b" ")?;
            }
            let arg = arg.as_ref();
            slot.write_escaped(arg.as_bytes(), Some(arg.len()), false)?;
        }
        slot.write_raw(b"\"")?;
    }

    jd.put_key("time_human")?;
    jd.put_str(&now.format("%a %b %e %H:%M:%S %Y\n").to_string())?;
    jd.put_key("time_unix")?;
    jd.put_display(&now.timestamp())?;

    jd.close_object()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::{json, Value};

    #[test]
    fn meta_info_record() {
        let now = Utc.with_ymd_and_hms(2023, 3, 5, 7, 8, 9).unwrap();
        let mut jd = Emitter::new(Vec::new());
        dump_meta_info(&mut jd, &["wrinfo", "-i", "wlan\"0"], &now).unwrap();
        let out = String::from_utf8(jd.finish().unwrap()).unwrap();

        assert!(out.contains("\"time_human\": \"Sun Mar  5 07:08:09 2023\\n\""));
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "cmdline": "wrinfo -i wlan\"0",
                "time_human": "Sun Mar  5 07:08:09 2023\n",
                "time_unix": 1678000089,
            })
        );
    }

    #[test]
    fn empty_command_line() {
        let now = Utc.timestamp_opt(0, 0).unwrap();
        let mut jd = Emitter::new(Vec::new());
        let args: [&str; 0] = [];
        dump_meta_info(&mut jd, &args, &now).unwrap();
        let value: Value = serde_json::from_slice(&jd.finish().unwrap()).unwrap();
        assert_eq!(value["cmdline"], "");
        assert_eq!(value["time_unix"], 0);
    }
}
