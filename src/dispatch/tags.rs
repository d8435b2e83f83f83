//! Action type tags, `<store>/<action>`.

pub const LOGIN: &str = "auth/login";

pub const GET_ALL_PROJECTS: &str = "projects/getAllProjects";
pub const GET_SINGLE_PROJECT: &str = "projects/getSingleProject";
pub const CREATE_PROJECT: &str = "projects/createProject";
pub const EDIT_PROJECT: &str = "projects/editProject";
pub const DELETE_PROJECT: &str = "projects/deleteProject";

pub const GET_ALL_COMMENTS: &str = "comments/getAllComments";
pub const POST_COMMENT: &str = "comments/postComment";

pub const GET_ALL_REACTIONS: &str = "reactions/getAllReactions";
pub const POST_REACTION: &str = "reactions/postReaction";

pub const GET_ALL_ANNOUNCEMENTS: &str = "announcements/getAllAnnouncements";
pub const GET_SINGLE_ANNOUNCEMENT: &str = "announcements/getSingleAnnouncement";
pub const CREATE_ANNOUNCEMENT: &str = "announcements/createAnnouncement";
pub const EDIT_ANNOUNCEMENT: &str = "announcements/editAnnouncement";
pub const DELETE_ANNOUNCEMENT: &str = "announcements/deleteAnnouncement";

pub const GET_ALL_CONVERSATIONS: &str = "messages/getAllConversations";
pub const CREATE_CONVERSATION: &str = "messages/createConversation";
pub const GET_ALL_MESSAGES: &str = "messages/getAllMessages";
pub const SEND_MESSAGE: &str = "messages/sendMessages";

pub const GET_ALL_USERS: &str = "users/getAllUsers";
pub const ADD_USER: &str = "users/addUser";
pub const EDIT_USER: &str = "users/editUser";
pub const DELETE_USER: &str = "users/deleteUser";

pub const GET_ALL_BARANGAYS: &str = "barangays/getAllBarangays";
pub const GET_ALL_CONTACTS: &str = "contacts/getAllContacts";

pub const GET_ALL_UPDATES: &str = "updates/getAllUpdates";
pub const CREATE_UPDATE: &str = "updates/createUpdate";
pub const EDIT_UPDATE: &str = "updates/editUpdate";
pub const DELETE_UPDATE: &str = "updates/deleteUpdate";

pub const UPLOAD_IMAGES: &str = "media/uploadImages";
pub const DESTROY_IMAGE: &str = "media/destroyImage";
