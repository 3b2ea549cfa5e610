use anyhow::{Result, bail};
use std::io::{self, IsTerminal};
use zeroize::Zeroizing;

/// Placeholder argument asking for the password to be read out of band.
pub const READ_PASSWORD: &str = "-";

pub fn resolve_password(arg: &str) -> Result<Zeroizing<String>> {
    if arg == READ_PASSWORD {
        read_password()
    } else {
        Ok(Zeroizing::new(arg.to_owned()))
    }
}

pub fn read_password() -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  HASHSCHEMA_PASSWORD="supersecret" hashschema - SSHA
    if let Ok(pw) = std::env::var("HASHSCHEMA_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    //  stdin (Pipeline)
    //  echo "supersecret" | hashschema - SSHA256/24
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(buf);
        }
    }

    //  Interactive (TTY)
    if io::stdin().is_terminal() {
        let pw = rpassword::prompt_password("Password: ")?;
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    bail!("No password provided")
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
