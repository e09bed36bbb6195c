use tracing::{info, warn};

use crate::constants::tool;
use crate::device::{self, Device, Property};
use crate::error::Result;
use crate::runner::ToolRunner;
use crate::transcript::Transcript;

fn display_command(args: &[&str]) -> String {
    format!("{} {}", tool::BINARY, args.join(" "))
}

/// Session-owned model of the current device hierarchy.
///
/// The device list is rebuilt wholesale from fresh tool output on every
/// refresh; IDs and attachments can change at any moment outside this
/// program's control (hot-plug), so nothing here is ever patched
/// incrementally except the one documented case in [`Xinput::set_prop`].
pub struct Xinput<R: ToolRunner> {
    runner: R,
    devices: Vec<Device>,
}

impl<R: ToolRunner> Xinput<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            devices: Vec::new(),
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// First device with the given ID. Duplicate IDs in tool output are
    /// kept as separate records, so "first" mirrors the tool's order.
    pub fn device_by_id(&self, id: u32) -> Option<&Device> {
        self.devices.iter().find(|device| device.id == id)
    }

    pub fn transcript(&self) -> &Transcript {
        self.runner.transcript()
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        self.runner.transcript_mut()
    }

    /// Rebuild the whole device list, in the tool's listing order.
    pub fn refresh_devices(&mut self) -> Result<()> {
        let id_args = [tool::LIST, tool::ID_ONLY];
        let id_out = self.runner.run(&id_args)?;

        let mut devices = Vec::new();
        for line in id_out.lines() {
            let id = device::parse_device_id(line, &display_command(&id_args))?;
            devices.push(self.fetch_device(id)?);
        }

        info!(count = devices.len(), "refreshed device list");
        self.devices = devices;
        Ok(())
    }

    fn fetch_device(&mut self, id: u32) -> Result<Device> {
        let id_str = id.to_string();

        let name_out = self.runner.run(&[tool::LIST, tool::NAME_ONLY, &id_str])?;
        // Trailing newlines only; internal whitespace is part of the name.
        let name = name_out.trim_end_matches('\n').to_owned();

        let short_out = self.runner.run(&[tool::LIST, tool::SHORT, &id_str])?;
        let (device_type, is_master) = device::classify_short_listing(&short_out);

        let properties = self.fetch_properties(id)?;

        Ok(Device {
            id,
            name,
            device_type,
            is_master,
            properties,
        })
    }

    fn fetch_properties(&mut self, id: u32) -> Result<Vec<Property>> {
        let id_str = id.to_string();
        let args = [tool::LIST_PROPS, id_str.as_str()];
        let out = self.runner.run(&args)?;
        device::parse_prop_listing(&out, &display_command(&args))
    }

    /// Re-fetch one device's properties in place.
    pub fn refresh_props(&mut self, device_id: u32) -> Result<()> {
        let properties = self.fetch_properties(device_id)?;
        if let Some(device) = self.devices.iter_mut().find(|d| d.id == device_id) {
            device.properties = properties;
        }
        Ok(())
    }

    /// Raw `list <id>` output, for the device-info view.
    pub fn device_info(&mut self, device_id: u32) -> Result<String> {
        self.runner.run(&[tool::LIST, &device_id.to_string()])
    }

    /// Set a driver property. The in-memory value is patched for immediate
    /// display and re-derived from tool output on the next full refresh.
    pub fn set_prop(&mut self, device_id: u32, prop_id: u32, value: &str) -> Result<()> {
        self.runner.run(&[
            tool::SET_PROP,
            &device_id.to_string(),
            &prop_id.to_string(),
            value,
        ])?;

        if let Some(prop) = self
            .devices
            .iter_mut()
            .find(|d| d.id == device_id)
            .and_then(|d| d.properties.iter_mut().find(|p| p.id == prop_id))
        {
            prop.value = value.to_owned();
        }
        Ok(())
    }

    /// Detach a slave device from its master. No-op on masters and on IDs
    /// the model does not know; the caller refreshes the device list
    /// afterwards.
    pub fn float_device(&mut self, device_id: u32) -> Result<()> {
        match self.device_by_id(device_id) {
            Some(device) if device.is_master => {
                warn!(device_id, "cannot float a master device");
                return Ok(());
            }
            None => {
                warn!(device_id, "unknown device, not floating");
                return Ok(());
            }
            Some(_) => {}
        }
        self.runner.run(&[tool::FLOAT, &device_id.to_string()])?;
        Ok(())
    }

    /// Reattach a slave device to a master. Same no-op rules as
    /// [`Xinput::float_device`]; the caller refreshes afterwards.
    pub fn reattach_device(&mut self, device_id: u32, master_id: u32) -> Result<()> {
        match self.device_by_id(device_id) {
            Some(device) if device.is_master => {
                warn!(device_id, "cannot reattach a master device");
                return Ok(());
            }
            None => {
                warn!(device_id, "unknown device, not reattaching");
                return Ok(());
            }
            Some(_) => {}
        }
        self.runner
            .run(&[tool::REATTACH, &device_id.to_string(), &master_id.to_string()])?;
        Ok(())
    }

    /// Create a new master device pair, then re-derive the device list.
    /// No-op for an empty name.
    pub fn create_master(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            warn!("refusing to create a master device with an empty name");
            return Ok(());
        }
        self.runner.run(&[tool::CREATE_MASTER, name])?;
        self.refresh_devices()
    }

    /// Remove a master device, then re-derive the device list. No-op unless
    /// the model knows the ID as a master.
    pub fn remove_master(&mut self, device_id: u32) -> Result<()> {
        match self.device_by_id(device_id) {
            Some(device) if device.is_master => {}
            _ => {
                warn!(device_id, "not a master device, not removing");
                return Ok(());
            }
        }
        self.runner.run(&[tool::REMOVE_MASTER, &device_id.to_string()])?;
        self.refresh_devices()
    }
}
