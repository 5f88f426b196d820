use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use contracts::domain::common::NamedRef;
use leptos::prelude::*;

use crate::shared::error::ApiError;
use crate::shared::http::{get_json, ApiClient};

/// Option lists shared between panels (select boxes fed by another resource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lookup {
    RoomTypes,
    Guests,
}

impl Lookup {
    pub fn endpoint(self) -> &'static str {
        match self {
            Lookup::RoomTypes => "/api/room-types",
            Lookup::Guests => "/api/guests",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl From<NamedRef> for SelectOption {
    fn from(r: NamedRef) -> Self {
        Self {
            value: r.id.to_string(),
            label: r.name,
        }
    }
}

pub async fn fetch_lookup<C>(client: &C, lookup: Lookup) -> Result<Vec<SelectOption>, ApiError>
where
    C: ApiClient + ?Sized,
{
    let refs: Vec<NamedRef> = get_json(client, lookup.endpoint()).await?;
    Ok(refs.into_iter().map(SelectOption::from).collect())
}

/// Anything that can make a lookup available before a panel lists its rows.
#[async_trait(?Send)]
pub trait LookupCache {
    async fn ensure_loaded<C>(&self, client: &C, lookup: Lookup)
    where
        C: ApiClient + ?Sized;
}

/// Context store of loaded lookups.
///
/// A select bound to a lookup that has not resolved yet shows no options
/// and fills in when it does.
#[derive(Clone, Copy)]
pub struct LookupStore {
    options: RwSignal<BTreeMap<Lookup, Vec<SelectOption>>>,
    loaded: RwSignal<BTreeSet<Lookup>>,
}

impl LookupStore {
    pub fn new() -> Self {
        Self {
            options: RwSignal::new(BTreeMap::new()),
            loaded: RwSignal::new(BTreeSet::new()),
        }
    }

    /// Reactive `(value, label)` pairs for a select.
    pub fn options(&self, lookup: Lookup) -> Vec<(String, String)> {
        self.options.with(|map| {
            map.get(&lookup)
                .map(|opts| {
                    opts.iter()
                        .map(|o| (o.value.clone(), o.label.clone()))
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    pub fn is_loaded(&self, lookup: Lookup) -> bool {
        self.loaded.with_untracked(|set| set.contains(&lookup))
    }

    /// Load `lookup` unless it is already loaded. Failures are logged and
    /// leave the select empty; the dependent panel still loads.
    pub async fn ensure<C>(self, client: &C, lookup: Lookup)
    where
        C: ApiClient + ?Sized,
    {
        if !self.is_loaded(lookup) {
            self.refresh(client, lookup).await;
        }
    }

    pub async fn refresh<C>(self, client: &C, lookup: Lookup)
    where
        C: ApiClient + ?Sized,
    {
        match fetch_lookup(client, lookup).await {
            Ok(opts) => {
                log::debug!("lookup {:?}: {} options", lookup, opts.len());
                self.options.update(|map| {
                    map.insert(lookup, opts);
                });
                self.loaded.update(|set| {
                    set.insert(lookup);
                });
            }
            Err(e) => log::warn!("lookup {:?} failed: {}", lookup, e),
        }
    }
}

#[async_trait(?Send)]
impl LookupCache for LookupStore {
    async fn ensure_loaded<C>(&self, client: &C, lookup: Lookup)
    where
        C: ApiClient + ?Sized,
    {
        self.ensure(client, lookup).await;
    }
}

impl Default for LookupStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_lookups() -> LookupStore {
    use_context::<LookupStore>().expect("LookupStore not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockClient;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_fetch_lookup_maps_id_and_name() {
        let client = MockClient::new().respond(Ok(json!([
            {"id": 1, "name": "Standard", "base_price": 99.0},
            {"id": 2, "name": "Suite"}
        ])));
        let opts = block_on(fetch_lookup(&client, Lookup::RoomTypes)).unwrap();
        assert_eq!(
            opts,
            vec![
                SelectOption { value: "1".into(), label: "Standard".into() },
                SelectOption { value: "2".into(), label: "Suite".into() },
            ]
        );
        assert_eq!(client.requests()[0].path, "/api/room-types");
    }

    #[test]
    fn test_fetch_lookup_propagates_errors() {
        let client = MockClient::new().respond(Err(ApiError::Status { status: 500 }));
        assert_eq!(
            block_on(fetch_lookup(&client, Lookup::Guests)),
            Err(ApiError::Status { status: 500 })
        );
    }
}
