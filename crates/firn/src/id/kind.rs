use crate::Snowflake;

mod sealed {
    /// Prevents downstream crates from adding identifier categories.
    pub trait Sealed {}
}

/// Compile-time category of a [`Snowflake`] identifier.
///
/// Implemented only by the marker types in this module. The trait is sealed:
/// the remote data model fixes the set of categories and the conversions
/// between them, so neither is extensible from outside.
pub trait EntityKind: sealed::Sealed + 'static {
    /// Category name shown in `Debug` output.
    const NAME: &'static str;
}

/// The unknown category. Identifiers carry it until code commits them to a
/// concrete entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Any;

impl sealed::Sealed for Any {}

impl EntityKind for Any {
    const NAME: &'static str = "Any";
}

macro_rules! entity_kinds {
    ($($(#[$meta:meta])* $kind:ident => $alias:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $kind;

            impl sealed::Sealed for $kind {}

            impl EntityKind for $kind {
                const NAME: &'static str = stringify!($kind);
            }

            #[doc = concat!("Alias for [`Snowflake`]`<", stringify!($kind), ">`.")]
            pub type $alias = Snowflake<$kind>;

            impl From<Snowflake<Any>> for Snowflake<$kind> {
                /// Commits an untyped identifier to this category.
                fn from(id: Snowflake<Any>) -> Self {
                    Self::new(id.get())
                }
            }

            impl From<Snowflake<$kind>> for Snowflake<Any> {
                /// Erases the category.
                fn from(id: Snowflake<$kind>) -> Self {
                    Self::new(id.get())
                }
            }
        )+
    };
}

entity_kinds! {
    /// Marks an id as naming a guild (a server).
    Guild => GuildId,
    /// Marks an id as naming a guild role.
    Role => RoleId,
    /// Marks an id as naming a user or bot account.
    User => UserId,
    /// Marks an id as naming a channel, thread, or channel category.
    Channel => ChannelId,
    /// Marks an id as naming a message.
    Message => MessageId,
    /// Marks an id as naming a custom emoji.
    Emoji => EmojiId,
    /// Marks an id as naming a webhook.
    Webhook => WebhookId,
    /// Marks an id as naming an application.
    Application => ApplicationId,
}

/// A guild's `@everyone` role is assigned the guild's own identifier value,
/// so a guild id converts directly to that role's id. No other conversion
/// between two concrete categories exists.
impl From<Snowflake<Guild>> for Snowflake<Role> {
    fn from(id: Snowflake<Guild>) -> Self {
        Self::new(id.get())
    }
}

impl Snowflake<Guild> {
    /// Returns the id of this guild's `@everyone` role, which equals the
    /// guild id itself.
    pub const fn everyone_role(&self) -> Snowflake<Role> {
        Snowflake::new(self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_untyped_ids_to_a_category() {
        let raw: Snowflake = "175928847299117063".into();
        let user: UserId = raw.into();
        let guild = GuildId::from(raw);
        assert_eq!(user.get(), raw.get());
        assert_eq!(guild.get(), raw.get());
    }

    #[test]
    fn erases_category_back_to_untyped() {
        let channel = ChannelId::new(41_771_983_423_143_937);
        let raw: Snowflake = channel.into();
        assert_eq!(raw, 41_771_983_423_143_937_u64);
    }

    #[test]
    fn guild_id_doubles_as_everyone_role_id() {
        let guild = GuildId::new(81_384_788_765_712_384);
        let everyone: RoleId = guild.into();
        assert_eq!(everyone.get(), guild.get());
        assert_eq!(guild.everyone_role(), everyone);
    }

    #[test]
    fn marker_names_match_type_names() {
        assert_eq!(Any::NAME, "Any");
        assert_eq!(Guild::NAME, "Guild");
        assert_eq!(Webhook::NAME, "Webhook");
    }
}
