//! Fire-control leasing between servers, consoles, and remote weapons.
//!
//! Each ship grid has at most one controlling fire-control server. Weapons
//! and consoles on the grid register with that server while powered; losing
//! power or destroying the server releases every lease. All of this is plain
//! reference bookkeeping: every operation resolves or returns false.

use ahash::{AHashMap, AHashSet};

use crate::models::GridId;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ServerId(pub u32);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConsoleId(pub u32);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeaponId(pub u32);

#[derive(Debug, Default)]
pub struct ControlRegistry {
    // Grid claims, kept in both directions
    grid_servers: AHashMap<GridId, ServerId>,
    server_grids: AHashMap<ServerId, GridId>,

    // Leases held by each server
    weapons: AHashMap<ServerId, AHashSet<WeaponId>>,
    consoles: AHashMap<ServerId, AHashSet<ConsoleId>>,

    // Reverse lookups for unregistration
    weapon_servers: AHashMap<WeaponId, ServerId>,
    console_servers: AHashMap<ConsoleId, ServerId>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A server gained power: claim its grid. Fails when another server
    /// already controls the grid; re-claiming an own grid is fine.
    pub fn server_powered(&mut self, server: ServerId, grid: GridId) -> bool {
        if let Some(&existing) = self.grid_servers.get(&grid) {
            return existing == server;
        }
        self.grid_servers.insert(grid, server);
        self.server_grids.insert(server, grid);
        log::info!("fire control server {:?} now controls grid {:?}", server, grid);
        true
    }

    /// A server lost power or was destroyed: release the grid claim and drop
    /// every lease it held.
    pub fn server_unpowered(&mut self, server: ServerId) {
        if let Some(grid) = self.server_grids.remove(&server) {
            if self.grid_servers.get(&grid) == Some(&server) {
                self.grid_servers.remove(&grid);
            }
        }
        if let Some(weapons) = self.weapons.remove(&server) {
            for weapon in weapons {
                self.weapon_servers.remove(&weapon);
            }
        }
        if let Some(consoles) = self.consoles.remove(&server) {
            for console in consoles {
                self.console_servers.remove(&console);
            }
        }
    }

    /// A weapon gained power: register with the grid's controlling server,
    /// if one exists. Returns false when already registered.
    pub fn weapon_powered(&mut self, weapon: WeaponId, grid: GridId) -> bool {
        let server = match self.grid_servers.get(&grid) {
            Some(&server) => server,
            None => return false,
        };
        if self.weapons.entry(server).or_default().insert(weapon) {
            self.weapon_servers.insert(weapon, server);
            true
        } else {
            false
        }
    }

    pub fn weapon_unpowered(&mut self, weapon: WeaponId) {
        if let Some(server) = self.weapon_servers.remove(&weapon) {
            if let Some(weapons) = self.weapons.get_mut(&server) {
                weapons.remove(&weapon);
            }
        }
    }

    /// A console gained power: same leasing rules as weapons.
    pub fn console_powered(&mut self, console: ConsoleId, grid: GridId) -> bool {
        let server = match self.grid_servers.get(&grid) {
            Some(&server) => server,
            None => return false,
        };
        if self.consoles.entry(server).or_default().insert(console) {
            self.console_servers.insert(console, server);
            true
        } else {
            false
        }
    }

    pub fn console_unpowered(&mut self, console: ConsoleId) {
        if let Some(server) = self.console_servers.remove(&console) {
            if let Some(consoles) = self.consoles.get_mut(&server) {
                consoles.remove(&console);
            }
        }
    }

    pub fn controlling_server(&self, grid: GridId) -> Option<ServerId> {
        self.grid_servers.get(&grid).copied()
    }

    pub fn controlled_weapons(&self, server: ServerId) -> Option<&AHashSet<WeaponId>> {
        self.weapons.get(&server)
    }

    pub fn consoles(&self, server: ServerId) -> Option<&AHashSet<ConsoleId>> {
        self.consoles.get(&server)
    }

    /// A console is connected exactly while it holds a lease; there is no
    /// separately stored flag to go stale.
    pub fn is_console_connected(&self, console: ConsoleId) -> bool {
        self.console_servers.contains_key(&console)
    }
}
