//! Host serial device enumeration.

use crate::error::Result;

/// All serial ports the host reports right now.
///
/// The result is fresh on every call; hot-plugged devices show up on the
/// next query and unplugged ones disappear.
pub fn available_ports() -> Result<Vec<serialport::SerialPortInfo>> {
    Ok(serialport::available_ports()?)
}

/// Names of the ports in [`available_ports`], the set an open request is
/// checked against.
pub fn port_names() -> Result<Vec<String>> {
    Ok(available_ports()?
        .into_iter()
        .map(|info| info.port_name)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_enumeration() {
        match (port_names(), available_ports()) {
            (Ok(names), Ok(infos)) => assert_eq!(names.len(), infos.len()),
            (Err(_), Err(_)) => {}
            _ => panic!("enumeration calls disagreed"),
        }
    }
}
